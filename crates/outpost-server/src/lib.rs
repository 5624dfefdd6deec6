//! HTTP transport for the Outpost simulation engine.
//!
//! This crate provides an Axum server exposing the engine's two logical
//! operations, plus a placeholder status page:
//!
//! - **`GET /api/state`** -- full economy snapshot (counters + buildings)
//! - **`POST /api/action`** -- submit a build / upgrade / research action
//! - **`GET /`** -- minimal HTML status page with counters and API links
//!
//! # Architecture
//!
//! The transport holds no state of its own: handlers delegate to the
//! injected [`SharedEconomy`] and return its results verbatim. All
//! decision logic lives in `outpost-engine`.
//!
//! [`SharedEconomy`]: outpost_engine::SharedEconomy

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use state::AppState;
