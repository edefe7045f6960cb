pub mod task_handler;
pub mod user_handler;

use crate::config::Config;
use crate::repositories::Database;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: Arc<Database>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            db: Arc::new(Database::seeded()),
        }
    }
}
