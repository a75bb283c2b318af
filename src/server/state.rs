//! Application state shared across all request handlers.

use crate::server::adapter::RequestAdapter;

/// Shared state cloned into every axum handler.
///
/// The adapter holds its registry behind an `Arc`, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub adapter: RequestAdapter,
}

impl AppState {
    pub fn new(adapter: RequestAdapter) -> Self {
        Self { adapter }
    }
}
