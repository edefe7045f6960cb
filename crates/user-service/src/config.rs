use common::config as shared;
use std::collections::HashMap;
use std::env;

/// Default listen address for the user service.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Default UI origin allowed by CORS.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000"];

/// The user service verifies no tokens, so it needs no JWT settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a `HashMap` (for testing)
    #[must_use]
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        Config {
            bind_address: shared::bind_address(vars, DEFAULT_BIND_ADDRESS),
            cors_origins: shared::cors_origins(vars, DEFAULT_CORS_ORIGINS),
        }
    }
}
