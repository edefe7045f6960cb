//! Metrics definitions shared by the services.
//!
//! All metrics follow Prometheus naming conventions:
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded:
//! - `status`: 2 values (success, error)
//! - `error_category`: 4 values (malformed, signature_invalid, expired, none)
//! - `endpoint`: route templates (`/orders/:order_id`), unmatched paths are `/other`

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the Prometheus recorder and return a handle for `/metrics`.
///
/// # Errors
///
/// Fails if bucket configuration is invalid or a global recorder is already
/// installed in this process.
pub fn init_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Prefix("http_request".to_string()),
            &[
                0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.000,
            ],
        )?
        .install_recorder()
}

// ============================================================================
// Token Metrics
// ============================================================================

/// Record token issuance outcome
///
/// Metric: `token_issuance_total`
/// Labels: `status`
pub fn record_token_issuance(status: &str) {
    counter!("token_issuance_total", "status" => status.to_string()).increment(1);
}

/// Record token verification outcome
///
/// Metric: `token_verifications_total`
/// Labels: `status`, `error_category`
pub fn record_token_verification(status: &str, error_category: Option<&str>) {
    let category = error_category.unwrap_or("none");
    counter!("token_verifications_total", "status" => status.to_string(), "error_category" => category.to_string())
        .increment(1);
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request duration and count
///
/// Metrics: `http_request_duration_seconds`, `http_requests_total`
/// Labels: `method`, `endpoint`, `status_code`
pub fn record_http_request(method: &str, endpoint: &str, status_code: u16, duration: Duration) {
    histogram!("http_request_duration_seconds",
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
        "status_code" => status_code.to_string()
    )
    .record(duration.as_secs_f64());

    counter!("http_requests_total",
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
        "status_code" => status_code.to_string()
    )
    .increment(1);
}
