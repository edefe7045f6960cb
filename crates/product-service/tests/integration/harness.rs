//! Spawns the product service with the shared test secret.

use product_service::config::Config;
use product_service::handlers::AppState;
use product_service::routes;
use service_test_utils::{
    test_jwt_config, test_metrics_handle, ManualClock, TestServer, TestTokenBuilder,
};
use std::sync::Arc;

pub fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:0".to_string(),
        jwt: test_jwt_config(),
        cors_origins: vec!["http://localhost:3000".to_string()],
    }
}

pub async fn spawn_product_server() -> Result<TestServer, anyhow::Error> {
    let state = Arc::new(AppState::new(test_config()));
    TestServer::spawn(routes::build_routes(state, test_metrics_handle())).await
}

pub async fn spawn_product_server_with_clock(
    clock: Arc<ManualClock>,
) -> Result<TestServer, anyhow::Error> {
    let state = Arc::new(AppState::with_clock(test_config(), clock));
    TestServer::spawn(routes::build_routes(state, test_metrics_handle())).await
}

/// A valid token for seeded user 2.
pub fn user_token() -> String {
    TestTokenBuilder::new()
        .for_user(2, "user1")
        .with_role("user")
        .build()
}
