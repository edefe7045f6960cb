//! Test Reports Service Library
//!
//! Read-only viewer over automated test reports stored as JSON and HTML
//! files under `REPORTS_DIR`. No authentication.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `models` - Report listings, history and stats
//! - `repositories` - File-backed report store
//! - `routes` - Router assembly

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
