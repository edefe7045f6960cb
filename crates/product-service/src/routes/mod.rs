use crate::handlers::{product_handler, AppState};
use axum::{
    middleware,
    routing::{get, patch, post},
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

    let public_routes = Router::new().route("/reset-db", post(product_handler::handle_reset_db));

    let protected_routes = Router::new()
        .route(
            "/products",
            get(product_handler::handle_list_products).post(product_handler::handle_create_product),
        )
        .route(
            "/products/:product_id",
            get(product_handler::handle_get_product)
                .put(product_handler::handle_update_product)
                .delete(product_handler::handle_delete_product),
        )
        .route("/products/sku/:sku", get(product_handler::handle_get_product_by_sku))
        .route(
            "/products/:product_id/stock",
            patch(product_handler::handle_update_stock),
        )
        .route("/categories", get(product_handler::handle_categories))
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth));

    let service_routes = public_routes
        .merge(protected_routes)
        .with_state(state.clone());

    finish_router(service_routes, metrics_handle, &state.config.cors_origins)
}
