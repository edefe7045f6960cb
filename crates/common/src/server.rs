//! Router assembly and serving shared by the services.
//!
//! Every service exposes the same operational endpoints and the same global
//! layer stack:
//!
//! - `/health` - Liveness probe (plain "OK")
//! - `/metrics` - Prometheus exposition
//! - CORS for the configured UI origins
//! - `TraceLayer` for request logging
//! - 30 second request timeout
//! - HTTP metrics middleware (outermost, sees every response)

use crate::middleware::http_metrics_middleware;
use axum::{
    extract::State,
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Request timeout applied to every route.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Liveness probe handler.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Render the Prometheus exposition text.
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}

/// Install the global metrics recorder, or fall back to a detached recorder
/// when one is already installed (e.g. several servers in one test process).
#[must_use]
pub fn metrics_handle() -> PrometheusHandle {
    match crate::observability::metrics::init_metrics_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            tracing::debug!(target: "common.server", error = %e, "Using detached metrics recorder");
            PrometheusBuilder::new().build_recorder().handle()
        }
    }
}

/// Build the CORS layer for the given origins.
///
/// Credentials are allowed, so methods and headers mirror the request rather
/// than using a wildcard. Unparsable origins are logged and skipped.
#[must_use]
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(target: "common.server", origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Merge operational routes into a service router and apply the global layers.
pub fn finish_router(
    service_routes: Router,
    metrics_handle: PrometheusHandle,
    cors_origins: &[String],
) -> Router {
    let operational_routes = Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics_handle);

    // Layer order (bottom-to-top execution):
    // 1. TimeoutLayer (innermost)
    // 2. TraceLayer
    // 3. CorsLayer
    // 4. http_metrics_middleware (outermost)
    service_routes
        .merge(operational_routes)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .layer(middleware::from_fn(http_metrics_middleware))
}

/// Bind and serve until the process receives Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address does not parse, cannot be bound, or the
/// server fails.
pub async fn serve(app: Router, bind_address: &str, service_name: &str) -> Result<(), std::io::Error> {
    let addr: SocketAddr = bind_address.parse().map_err(|e| {
        tracing::error!(target: "common.server", "Invalid bind address: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{} listening on {}", service_name, listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(target: "common.server", error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
