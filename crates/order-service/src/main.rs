use common::observability::init_tracing;
use common::server::{metrics_handle, serve};
use order_service::config::Config;
use order_service::handlers::AppState;
use order_service::routes;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("order_service=debug,common=debug,tower_http=debug");

    info!("Starting Order Management Service");

    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Configuration loaded successfully");

    let bind_address = config.bind_address.clone();
    let state = Arc::new(AppState::new(config));

    let app = routes::build_routes(state, metrics_handle());

    serve(app, &bind_address, "Order Management Service").await?;

    Ok(())
}
