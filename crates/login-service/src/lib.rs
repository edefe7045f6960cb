//! Login Service Library
//!
//! Authenticates the seeded demo users and mints the bearer tokens every
//! other service verifies.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `models` - Request and response bodies
//! - `repositories` - User directory
//! - `routes` - Router assembly
//! - `services` - Credential and token login logic

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
