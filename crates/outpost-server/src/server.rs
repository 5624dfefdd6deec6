//! HTTP server lifecycle management.
//!
//! Binds the address from the engine's [`TransportConfig`] and runs the
//! Axum server until the process is terminated. There is no separate
//! server-side config type; the transport section of the YAML config is
//! the single source of truth for where to listen.

use std::net::SocketAddr;
use std::sync::Arc;

use outpost_engine::TransportConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Errors that can occur when starting or running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured transport address is invalid or cannot be bound.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// Start the Outpost HTTP server on the configured transport address.
///
/// Builds the router around the given state and serves requests until
/// the process is terminated. Returns `Ok(())` on clean shutdown.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the configured host/port do not
/// form a bindable address, or [`ServerError::Serve`] on a fatal I/O
/// error while serving.
pub async fn start_server(
    transport: &TransportConfig,
    state: Arc<AppState>,
) -> Result<(), ServerError> {
    let addr = bind_addr(transport)?;
    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Outpost server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}

/// Resolve the transport configuration into a socket address.
fn bind_addr(transport: &TransportConfig) -> Result<SocketAddr, ServerError> {
    format!("{}:{}", transport.host, transport.port)
        .parse()
        .map_err(|e| {
            ServerError::Bind(format!(
                "invalid address {}:{}: {e}",
                transport.host, transport.port
            ))
        })
}
