//! Time sources for the Token Authority.
//!
//! Production code uses [`SystemClock`]. Tests that need to cross a token's
//! expiry without sleeping use `ManualClock` (behind the `test-utils` feature).

use chrono::{DateTime, Utc};

/// Source of "now" for token issuance and expiry checks.
pub trait Clock: Send + Sync {
    /// Current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "test-utils"))]
mod manual {
    use super::Clock;
    use chrono::{DateTime, Duration, Utc};
    use std::sync::Mutex;

    /// A clock that only moves when told to.
    #[derive(Debug)]
    pub struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        /// Creates a clock frozen at `start`.
        #[must_use]
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(start),
            }
        }

        /// Creates a clock frozen at the current wall-clock time.
        #[must_use]
        pub fn starting_now() -> Self {
            Self::new(Utc::now())
        }

        /// Moves the clock forward by `by`.
        pub fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            *now += by;
        }

        /// Sets the clock to `to`.
        pub fn set(&self, to: DateTime<Utc>) {
            let mut now = self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            *now = to;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
        }
    }
}
