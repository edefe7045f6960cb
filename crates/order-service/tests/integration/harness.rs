//! Spawns the order service with the shared test secret.

use order_service::config::Config;
use order_service::handlers::AppState;
use order_service::routes;
use serde_json::Value;
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

pub async fn spawn_order_server() -> Result<TestServer, anyhow::Error> {
    let state = Arc::new(AppState::new(test_config()));
    TestServer::spawn(routes::build_routes(state, test_metrics_handle())).await
}

pub async fn spawn_order_server_with_clock(
    clock: Arc<ManualClock>,
) -> Result<TestServer, anyhow::Error> {
    let state = Arc::new(AppState::with_clock(test_config(), clock));
    TestServer::spawn(routes::build_routes(state, test_metrics_handle())).await
}

/// A valid token for the seeded admin.
pub fn admin_token() -> String {
    TestTokenBuilder::new().build()
}

pub async fn get_json(server: &TestServer, path: &str) -> Result<(u16, Value), anyhow::Error> {
    let response = server
        .client()
        .get(server.url_for(path))
        .bearer_auth(admin_token())
        .send()
        .await?;
    let status = response.status().as_u16();
    Ok((status, response.json().await?))
}

pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .map(|items| items.iter().filter_map(|o| o["id"].as_i64()).collect())
        .unwrap_or_default()
}
