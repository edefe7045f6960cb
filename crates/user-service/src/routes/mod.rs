use crate::handlers::{task_handler, user_handler, AppState};
use crate::middleware::reject_unknown_user_query_params;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use common::server::finish_router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Build the application routes with the global layer stack.
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let user_collection = Router::new()
        .route(
            "/users",
            get(user_handler::handle_list_users).post(user_handler::handle_create_user),
        )
        .route_layer(middleware::from_fn(reject_unknown_user_query_params));

    let service_routes = Router::new()
        .merge(user_collection)
        .route(
            "/users/:user_id",
            get(user_handler::handle_get_user)
                .put(user_handler::handle_update_user)
                .delete(user_handler::handle_delete_user),
        )
        .route(
            "/users/:user_id/tasks",
            get(task_handler::handle_list_user_tasks).post(task_handler::handle_create_task),
        )
        .route(
            "/users/:user_id/tasks/:task_id",
            get(task_handler::handle_get_user_task)
                .put(task_handler::handle_update_task)
                .delete(task_handler::handle_delete_task),
        )
        .route("/tasks", get(task_handler::handle_list_all_tasks))
        .route("/reset-db", post(user_handler::handle_reset_db))
        .with_state(state.clone());

    finish_router(service_routes, metrics_handle, &state.config.cors_origins)
}
