//! Fixed fixtures for reproducible tests.

use common::config::JwtConfig;
use common::secret::SecretString;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Secret shared by every service under test.
pub const TEST_SECRET: &str = "test-secret-key-shared-by-all-services-0123456789";

/// A secret no service under test is configured with.
pub const OTHER_SECRET: &str = "some-other-secret-nobody-deployed-0123456789abcd";

/// Token lifetime used by test configs.
pub const TEST_TOKEN_LIFETIME_MINUTES: i64 = 60;

/// JWT config built from [`TEST_SECRET`] with the default lifetime.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(SecretString::from(TEST_SECRET), TEST_TOKEN_LIFETIME_MINUTES)
        .expect("test JWT config is valid")
}

/// A metrics handle that is not installed as the global recorder.
///
/// Each test server gets its own, so tests never contend for the global slot.
pub fn test_metrics_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}
