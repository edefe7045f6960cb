use common::config as shared;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Default listen address for the report service.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5001";

/// Default dashboard origins allowed by CORS.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://localhost:5174",
];

/// Root holding `<test_type>/reports/` directories.
pub const DEFAULT_REPORTS_DIR: &str = "automation/testcases";

pub const ENV_REPORTS_DIR: &str = "REPORTS_DIR";

/// The report service verifies no tokens, so it needs no JWT settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub cors_origins: Vec<String>,
    pub reports_dir: PathBuf,
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
        let reports_dir = vars
            .get(ENV_REPORTS_DIR)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_REPORTS_DIR);

        Config {
            bind_address: shared::bind_address(vars, DEFAULT_BIND_ADDRESS),
            cors_origins: shared::cors_origins(vars, DEFAULT_CORS_ORIGINS),
            reports_dir: PathBuf::from(reports_dir),
        }
    }
}
