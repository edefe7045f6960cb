//! Configuration shared by every service.
//!
//! The JWT settings must be identical across all deployed services: a token
//! minted with one secret is rejected as `SignatureInvalid` by a service
//! configured with another. Nothing here can detect such a mismatch; it is a
//! deployment invariant.

use crate::secret::{ExposeSecret, SecretString};
use std::collections::HashMap;
use thiserror::Error;

/// Default token lifetime in minutes.
pub const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 60;

/// Longest accepted token lifetime in minutes (one year).
pub const MAX_TOKEN_LIFETIME_MINUTES: i64 = 365 * 24 * 60;

/// The single signing algorithm accepted for configuration.
pub const SUPPORTED_ALGORITHM: &str = "HS256";

/// Secrets shorter than this (the HS256 output size) are accepted with a warning.
pub const RECOMMENDED_MIN_SECRET_BYTES: usize = 32;

pub const ENV_JWT_SECRET_KEY: &str = "JWT_SECRET_KEY";
pub const ENV_JWT_ALGORITHM: &str = "JWT_ALGORITHM";
pub const ENV_JWT_EXPIRE_MINUTES: &str = "JWT_ACCESS_TOKEN_EXPIRE_MINUTES";
pub const ENV_BIND_ADDRESS: &str = "BIND_ADDRESS";
pub const ENV_CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("Unsupported JWT algorithm: {0} (only HS256 is accepted)")]
    UnsupportedAlgorithm(String),
}

/// Shared Token Authority settings.
///
/// `Debug` output redacts the secret.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret, identical in every service.
    pub secret: SecretString,
    /// Lifetime of issued tokens in minutes, in `1..=MAX_TOKEN_LIFETIME_MINUTES`.
    pub token_lifetime_minutes: i64,
}

impl JwtConfig {
    /// Builds a config, rejecting an empty secret or a lifetime outside
    /// `1..=MAX_TOKEN_LIFETIME_MINUTES`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if either value is unusable.
    pub fn new(secret: SecretString, token_lifetime_minutes: i64) -> Result<Self, ConfigError> {
        if secret.expose_secret().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: ENV_JWT_SECRET_KEY.to_string(),
                reason: "secret must not be empty".to_string(),
            });
        }

        if token_lifetime_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                name: ENV_JWT_EXPIRE_MINUTES.to_string(),
                reason: format!("must be a positive number of minutes, got {token_lifetime_minutes}"),
            });
        }

        if token_lifetime_minutes > MAX_TOKEN_LIFETIME_MINUTES {
            return Err(ConfigError::InvalidValue {
                name: ENV_JWT_EXPIRE_MINUTES.to_string(),
                reason: format!(
                    "must be at most {MAX_TOKEN_LIFETIME_MINUTES} minutes, got {token_lifetime_minutes}"
                ),
            });
        }

        Ok(Self {
            secret,
            token_lifetime_minutes,
        })
    }

    /// Load JWT configuration from a map of environment variables.
    ///
    /// # Errors
    ///
    /// - `MissingEnvVar` if `JWT_SECRET_KEY` is absent
    /// - `UnsupportedAlgorithm` if `JWT_ALGORITHM` is set to anything but HS256
    /// - `InvalidValue` for an empty secret or an unparsable/out-of-range lifetime
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let secret = vars
            .get(ENV_JWT_SECRET_KEY)
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_JWT_SECRET_KEY.to_string()))?;

        if let Some(algorithm) = vars.get(ENV_JWT_ALGORITHM) {
            if algorithm != SUPPORTED_ALGORITHM {
                return Err(ConfigError::UnsupportedAlgorithm(algorithm.clone()));
            }
        }

        let token_lifetime_minutes = match vars.get(ENV_JWT_EXPIRE_MINUTES) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| ConfigError::InvalidValue {
                name: ENV_JWT_EXPIRE_MINUTES.to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_TOKEN_LIFETIME_MINUTES,
        };

        let config = Self::new(SecretString::from(secret.clone()), token_lifetime_minutes)?;

        if config.secret.expose_secret().len() < RECOMMENDED_MIN_SECRET_BYTES {
            tracing::warn!(
                target: "common.config",
                min_bytes = RECOMMENDED_MIN_SECRET_BYTES,
                "JWT_SECRET_KEY is shorter than recommended for HS256"
            );
        }

        Ok(config)
    }

    /// Token lifetime as a duration.
    ///
    /// Saturates at `Duration::MAX` for a hand-built config whose minutes do
    /// not fit; issuing with such a lifetime fails with `IssueError`.
    #[must_use]
    pub fn token_lifetime(&self) -> chrono::Duration {
        chrono::Duration::try_minutes(self.token_lifetime_minutes).unwrap_or(chrono::Duration::MAX)
    }
}

/// Returns `BIND_ADDRESS` or the service's default.
#[must_use]
pub fn bind_address(vars: &HashMap<String, String>, default: &str) -> String {
    vars.get(ENV_BIND_ADDRESS)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Returns the comma-separated `CORS_ALLOWED_ORIGINS` list or the defaults.
#[must_use]
pub fn cors_origins(vars: &HashMap<String, String>, defaults: &[&str]) -> Vec<String> {
    match vars.get(ENV_CORS_ALLOWED_ORIGINS) {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(ToString::to_string)
            .collect(),
        None => defaults.iter().map(ToString::to_string).collect(),
    }
}
