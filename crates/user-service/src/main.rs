use common::observability::init_tracing;
use common::server::{metrics_handle, serve};
use std::sync::Arc;
use tracing::info;
use user_service::config::Config;
use user_service::handlers::AppState;
use user_service::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("user_service=debug,common=debug,tower_http=debug");

    info!("Starting User Management Service");

    let config = Config::from_env();
    let bind_address = config.bind_address.clone();
    let state = Arc::new(AppState::new(config));

    let app = routes::build_routes(state, metrics_handle());

    serve(app, &bind_address, "User Management Service").await?;

    Ok(())
}
