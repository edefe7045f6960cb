//! User Management Service Library
//!
//! Users and their tasks, held in memory. No authentication.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `middleware` - Query-parameter guard for `GET /users`
//! - `models` - Request and response bodies
//! - `repositories` - In-memory user and task tables
//! - `routes` - Router assembly

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
