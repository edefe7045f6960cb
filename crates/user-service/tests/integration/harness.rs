//! Spawns the user service with fresh seed data.

use service_test_utils::{test_metrics_handle, TestServer};
use std::collections::HashMap;
use std::sync::Arc;
use user_service::config::Config;
use user_service::handlers::AppState;
use user_service::routes;

pub async fn spawn_user_server() -> Result<TestServer, anyhow::Error> {
    let state = Arc::new(AppState::new(Config::from_vars(&HashMap::new())));
    TestServer::spawn(routes::build_routes(state, test_metrics_handle())).await
}
