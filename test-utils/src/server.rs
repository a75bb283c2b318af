//! Throwaway HTTP servers for tests.
//!
//! Serves an axum router on `127.0.0.1` with an OS-assigned port. Used both to stand in
//! for the upstream image API and to drive the real application router over HTTP.

use axum::Router;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// Axum router bound to an ephemeral local port.
///
/// The serving task is aborted when the value is dropped, so each test gets its own
/// server and nothing outlives it.
pub struct TestServer {
    /// Base URL including scheme and port, without a trailing slash.
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Binds an ephemeral port and starts serving `router` in the background.
    ///
    /// # Arguments
    /// - `router` - Fully configured router (state already applied)
    ///
    /// # Returns
    /// - `Ok(TestServer)` - Server accepting connections at `base_url`
    /// - `Err(TestError::Io)` - Failed to bind or read the local address
    pub async fn spawn(router: Router) -> Result<Self, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self { base_url, handle })
    }

    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
