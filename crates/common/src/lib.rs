//! Shared building blocks for the demo API services.
//!
//! Every service embeds its own [`jwt::TokenAuthority`] built from the same
//! [`config::JwtConfig`], so a token minted by the login service verifies in
//! the product and order services without a network round-trip.

#![warn(clippy::pedantic)]

/// Module for the `{"detail": ...}` error body every service answers with
pub mod error;

/// Module for shared configuration (JWT secret, lifetime, bind/CORS helpers)
pub mod config;

/// Module for secret types that prevent accidental logging
pub mod secret;

/// Module for time sources used by token issuance and verification
pub mod clock;

/// Module for the Token Authority (issue, verify, introspect)
pub mod jwt;

/// Module for validating request extractors
pub mod extract;

/// Module for `limit`/`offset` pagination
pub mod pagination;

/// Module for HTTP middleware (bearer auth, request metrics)
pub mod middleware;

/// Module for tracing and metrics setup
pub mod observability;

/// Module for router assembly and serving
pub mod server;
