use common::observability::init_tracing;
use common::server::{metrics_handle, serve};
use login_service::config::Config;
use login_service::handlers::auth_handler::AppState;
use login_service::routes;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("login_service=debug,common=debug,tower_http=debug");

    info!("Starting Login Service");

    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Configuration loaded successfully");

    let bind_address = config.bind_address.clone();
    let state = Arc::new(AppState::new(config));

    let app = routes::build_routes(state, metrics_handle());

    serve(app, &bind_address, "Login Service").await?;

    Ok(())
}
