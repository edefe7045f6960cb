use crate::handlers::{order_handler, AppState};
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
/// Public: `/reset-db`, `/health`, `/metrics`. Everything else requires a
/// bearer token.
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let auth_state = Arc::new(AuthState {
        authority: state.authority.clone(),
    });

    let public_routes = Router::new().route("/reset-db", post(order_handler::handle_reset_db));

    let protected_routes = Router::new()
        .route(
            "/orders",
            get(order_handler::handle_list_orders).post(order_handler::handle_create_order),
        )
        .route(
            "/orders/:order_id",
            get(order_handler::handle_get_order)
                .put(order_handler::handle_update_order)
                .delete(order_handler::handle_delete_order),
        )
        .route("/orders/:order_id/cancel", post(order_handler::handle_cancel_order))
        .route(
            "/users/:user_id/orders/summary",
            get(order_handler::handle_user_order_summary),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth));

    let service_routes = public_routes
        .merge(protected_routes)
        .with_state(state.clone());

    finish_router(service_routes, metrics_handle, &state.config.cors_origins)
}
