use common::observability::init_tracing;
use common::server::{metrics_handle, serve};
use report_service::config::Config;
use report_service::handlers::AppState;
use report_service::routes;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("report_service=debug,common=debug,tower_http=debug");

    info!("Starting Test Reports Service");

    let config = Config::from_env();
    if tokio::fs::metadata(&config.reports_dir).await.is_err() {
        warn!(
            reports_dir = %config.reports_dir.display(),
            "Reports directory does not exist yet; listings will be empty"
        );
    }

    let bind_address = config.bind_address.clone();
    let state = Arc::new(AppState::new(config));
    info!(reports_dir = %state.store.root().display(), "Serving reports");

    let app = routes::build_routes(state, metrics_handle());

    serve(app, &bind_address, "Test Reports Service").await?;

    Ok(())
}
