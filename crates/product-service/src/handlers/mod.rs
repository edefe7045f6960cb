pub mod product_handler;

use crate::config::Config;
use crate::repositories::Database;
use common::clock::Clock;
use common::jwt::TokenAuthority;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub authority: Arc<TokenAuthority>,
    pub db: Arc<Database>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let authority = Arc::new(TokenAuthority::new(&config.jwt));
        Self {
            config,
            authority,
            db: Arc::new(Database::seeded()),
        }
    }

    /// Same as [`AppState::new`] with an injected clock for token expiry.
    #[must_use]
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let authority = Arc::new(TokenAuthority::with_clock(&config.jwt, clock));
        Self {
            config,
            authority,
            db: Arc::new(Database::seeded()),
        }
    }
}
