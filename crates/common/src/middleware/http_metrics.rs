//! HTTP metrics middleware for capturing all request/response metrics
//!
//! Records ALL HTTP responses, including framework-level rejections that occur
//! before handlers run (415, 422 JSON errors, 404, 405).

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::observability::metrics::record_http_request;

/// Label used for requests that did not match a route.
const UNMATCHED_ENDPOINT: &str = "/other";

/// Middleware that records HTTP request metrics for all responses
///
/// The endpoint label is the matched route template (`/products/:product_id`),
/// never the raw path.
pub async fn http_metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_ENDPOINT.to_string(), |p| p.as_str().to_string());

    let response = next.run(request).await;

    record_http_request(&method, &endpoint, response.status().as_u16(), start.elapsed());

    response
}
