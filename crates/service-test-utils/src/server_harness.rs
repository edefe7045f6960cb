//! Test server harness for E2E testing
//!
//! Provides `TestServer` for spawning real service instances in tests.

use axum::Router;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// A service router served on a random local port.
///
/// The server task is aborted when the `TestServer` is dropped.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_health() -> anyhow::Result<()> {
///     let server = TestServer::spawn(routes::build_routes(state, test_metrics_handle())).await?;
///
///     let response = server.client().get(server.url_for("/health")).send().await?;
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn the router on `127.0.0.1:0` in the background.
    ///
    /// # Returns
    /// * `Ok(TestServer)` - Running server instance
    /// * `Err(anyhow::Error)` - If binding fails
    pub async fn spawn(app: Router) -> Result<Self, anyhow::Error> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            client: reqwest::Client::new(),
            handle,
        })
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Absolute URL for a path on this server
    pub fn url_for(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Get the socket address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// HTTP client for talking to the server
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
