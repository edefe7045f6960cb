use crate::handlers::{report_handler, AppState};
use axum::{routing::get, Router};
use common::server::finish_router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Build the application routes with the global layer stack.
///
/// Every route is read-only and public.
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let service_routes = Router::new()
        .route("/", get(report_handler::handle_root))
        .route("/api/reports", get(report_handler::handle_all_reports))
        .route("/api/reports/summary", get(report_handler::handle_summary))
        .route("/api/reports/:test_type", get(report_handler::handle_reports_by_type))
        .route(
            "/api/reports/:test_type/history",
            get(report_handler::handle_history),
        )
        .route(
            "/api/reports/:test_type/:report_id",
            get(report_handler::handle_report),
        )
        .route(
            "/api/reports/:test_type/:report_id/html",
            get(report_handler::handle_html_report),
        )
        .route("/api/stats", get(report_handler::handle_stats))
        .with_state(state.clone());

    finish_router(service_routes, metrics_handle, &state.config.cors_origins)
}
