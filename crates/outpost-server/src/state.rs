//! Shared application state for the HTTP transport.
//!
//! [`AppState`] carries the handle to the one live economy. It is
//! wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
//! extractor; the transport never touches the economy except through
//! the handle's two operations.

use outpost_engine::SharedEconomy;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handle to the process-wide economy.
    pub economy: SharedEconomy,
}

impl AppState {
    /// Create the application state around an existing economy handle.
    pub const fn new(economy: SharedEconomy) -> Self {
        Self { economy }
    }
}
