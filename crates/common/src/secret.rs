//! Secret types for protecting sensitive values from accidental logging.
//!
//! Re-exports the [`secrecy`] types used for the shared JWT secret and for
//! passwords received at login. `SecretString` implements `Debug` with
//! redaction, so any struct deriving `Debug` around it (for example
//! [`crate::config::JwtConfig`]) is safe to log, and the value is zeroized on
//! drop.
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct Credentials {
//!     username: String,
//!     password: SecretString,
//! }
//!
//! let creds = Credentials {
//!     username: "admin".to_string(),
//!     password: SecretString::from("admin123"),
//! };
//!
//! assert!(!format!("{creds:?}").contains("admin123"));
//! assert_eq!(creds.password.expose_secret(), "admin123");
//! ```

pub use secrecy::{ExposeSecret, SecretString};
