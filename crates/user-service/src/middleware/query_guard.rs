//! Rejects unexpected query keys on `GET /users`.

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use common::error::error_response;

/// Query keys accepted by `GET /users`.
const ALLOWED_USER_QUERY_PARAMS: &[&str] = &["limit", "offset"];

/// Unknown keys in a raw query string, deduplicated, in order of appearance.
fn unknown_keys<'a>(query: &'a str, allowed: &[&str]) -> Vec<&'a str> {
    let mut unknown: Vec<&str> = Vec::new();
    for key in query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').map_or(pair, |(key, _)| key))
    {
        if !allowed.contains(&key) && !unknown.contains(&key) {
            unknown.push(key);
        }
    }
    unknown
}

/// Middleware answering 422 when `GET /users` carries keys other than
/// `limit` and `offset`.
pub async fn reject_unknown_user_query_params(request: Request, next: Next) -> Response {
    if request.method() == Method::GET {
        let unknown = unknown_keys(request.uri().query().unwrap_or(""), ALLOWED_USER_QUERY_PARAMS);
        if !unknown.is_empty() {
            tracing::debug!(target: "user.middleware", "Rejected unknown query parameters");
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid query parameter(s): {}", unknown.join(", ")),
            );
        }
    }

    next.run(request).await
}
