pub mod report_handler;

use crate::config::Config;
use crate::repositories::ReportStore;

/// Application state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub store: ReportStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let store = ReportStore::new(config.reports_dir.clone());
        Self { config, store }
    }
}
