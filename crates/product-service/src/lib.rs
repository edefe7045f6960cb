//! Product Management Service Library
//!
//! Products and inventory, held in memory. Every route except `/reset-db`,
//! `/health` and `/metrics` requires a bearer token minted by the login
//! service; tokens are verified locally.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `models` - Request and response bodies
//! - `repositories` - In-memory product table
//! - `routes` - Router assembly

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
