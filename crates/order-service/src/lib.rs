//! Order Management Service Library
//!
//! Customer orders with cancellation and per-user summaries, held in memory.
//! Every route except `/reset-db`, `/health` and `/metrics` requires a bearer
//! token minted by the login service.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `models` - Request and response bodies
//! - `repositories` - In-memory order table
//! - `routes` - Router assembly

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
