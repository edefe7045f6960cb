//! # Service Test Utilities
//!
//! Shared test utilities for the demo API services.
//!
//! This crate provides:
//! - Fixed JWT fixtures (shared test secret, config, metrics handle)
//! - Test token builders (`TestTokenBuilder`, `tamper_signature`)
//! - Server test harness (`TestServer` for E2E tests)
//! - Custom assertions (`TokenAssertions` trait)
//! - A settable clock (`ManualClock`) for expiry tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use service_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> anyhow::Result<()> {
//!     let server = TestServer::spawn(app).await?;
//!
//!     let token = TestTokenBuilder::new()
//!         .for_user(1, "admin")
//!         .with_role("admin")
//!         .build();
//!
//!     token.assert_valid_jwt().assert_for_user(1);
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod server_harness;
pub mod token_builders;

// Re-export commonly used items
pub use assertions::*;
pub use common::clock::ManualClock;
pub use fixtures::*;
pub use server_harness::*;
pub use token_builders::*;
