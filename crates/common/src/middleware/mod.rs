//! HTTP middleware shared by the services.
//!
//! # Components
//!
//! - `auth` - Bearer-token authentication for protected routes
//! - `http_metrics` - HTTP request metrics middleware

pub mod auth;
pub mod http_metrics;

pub use auth::{extract_bearer_token, require_auth, AuthError, AuthState, AuthUser};
pub use http_metrics::http_metrics_middleware;
