//! Error body shared by all services.
//!
//! Clients of the demo services (the UI and the API-testing tool) read a single
//! `detail` field from every non-2xx response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason for the failure.
    pub detail: String,
}

impl ErrorBody {
    /// Creates an error body from any message.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Builds a response with the given status and a `{"detail": ...}` body.
pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(detail))).into_response()
}
