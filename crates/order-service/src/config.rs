use common::config::{self as shared, ConfigError, JwtConfig};
use std::collections::HashMap;
use std::env;

/// Default listen address for the order service.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8003";

/// Default UI origin allowed by CORS.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000"];

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub jwt: JwtConfig,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the shared JWT settings are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a `HashMap` (for testing)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the shared JWT settings are missing or invalid.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Ok(Config {
            bind_address: shared::bind_address(vars, DEFAULT_BIND_ADDRESS),
            jwt: JwtConfig::from_vars(vars)?,
            cors_origins: shared::cors_origins(vars, DEFAULT_CORS_ORIGINS),
        })
    }
}
