//! Endpoint handlers for the Outpost server.
//!
//! All handlers delegate to the [`SharedEconomy`] held in the shared
//! [`AppState`] and return its results verbatim.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/state` | Full economy snapshot |
//! | `POST` | `/api/action` | Submit a build / upgrade / research action |
//!
//! [`SharedEconomy`]: outpost_engine::SharedEconomy

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Json;
use outpost_types::{Action, ActionRequest};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing the current counters and API links.
///
/// This is a placeholder for the 3D client, which polls the JSON API
/// directly.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.economy.snapshot().await;
    let minerals = snapshot.minerals;
    let energy = snapshot.energy;
    let building_count = snapshot.buildings.len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Outpost</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Outpost</h1>
    <p class="subtitle">Resource-management simulation server</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Minerals</div>
            <div class="value">{minerals}</div>
        </div>
        <div class="metric">
            <div class="label">Energy</div>
            <div class="value">{energy}</div>
        </div>
        <div class="metric">
            <div class="label">Buildings</div>
            <div class="value">{building_count}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/state">/api/state</a> -- Current economy snapshot</li>
        <li>POST /api/action -- Submit an action ({{"action": "build", "payload": {{"type": "mine"}}}})</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/state -- full economy snapshot
// ---------------------------------------------------------------------------

/// Return the current economy snapshot: both counters and the full
/// buildings list, taken at a single instant.
pub async fn get_state(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.economy.snapshot().await;
    Ok(Json(serde_json::to_value(&snapshot)?))
}

// ---------------------------------------------------------------------------
// POST /api/action -- submit an action
// ---------------------------------------------------------------------------

/// Submit an action for processing.
///
/// The body is parsed into an [`ActionRequest`] by hand so malformed
/// bodies map to a 400 JSON error rather than the extractor's default
/// rejection. A well-formed request always succeeds, including
/// unrecognized action names (explicit no-op).
pub async fn submit_action(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let request: ActionRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("malformed action request: {e}")))?;

    let action = Action::from_request(&request);
    info!(action = %request.action, "action submitted");

    let outcome = state.economy.submit(&action).await;
    Ok(Json(outcome))
}
