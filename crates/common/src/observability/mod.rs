//! Tracing and metrics setup shared by the services.
//!
//! Tokens, passwords and the JWT secret never appear in log fields. Token
//! failures are logged at debug level with a bounded `category` only.

pub mod metrics;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` is used
/// (e.g. `"login_service=debug,common=debug,tower_http=debug"`).
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
