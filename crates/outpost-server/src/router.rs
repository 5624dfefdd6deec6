//! Axum router construction for the Outpost API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin client access.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Outpost server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/state` -- current economy snapshot
/// - `POST /api/action` -- submit an action
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // REST API
        .route("/api/state", get(handlers::get_state))
        .route("/api/action", post(handlers::submit_action))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
