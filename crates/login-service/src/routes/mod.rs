use crate::handlers::auth_handler::{self, AppState};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use common::middleware::{require_auth, AuthState};
use common::server::finish_router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Build the application routes with the global layer stack.
///
/// Public: `/login/credentials`, `/login/token`, `/validate` (checks its own
/// header), `/health`, `/metrics`. Protected: `/me`, `/logout`.
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let auth_state = Arc::new(AuthState {
        authority: state.authority.clone(),
    });

    let public_routes = Router::new()
        .route("/login/credentials", post(auth_handler::handle_login_credentials))
        .route("/login/token", post(auth_handler::handle_login_token))
        .route("/validate", get(auth_handler::handle_validate));

    let protected_routes = Router::new()
        .route("/me", get(auth_handler::handle_me))
        .route("/logout", post(auth_handler::handle_logout))
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth));

    let service_routes = public_routes
        .merge(protected_routes)
        .with_state(state.clone());

    finish_router(service_routes, metrics_handle, &state.config.cors_origins)
}
