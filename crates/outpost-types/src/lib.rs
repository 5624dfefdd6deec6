//! Shared type definitions for the Outpost simulation.
//!
//! This crate is the single source of truth for the types that cross the
//! engine/transport boundary. It contains no behavior beyond request
//! classification.
//!
//! # Modules
//!
//! - [`actions`] -- Action request, classified action, and outcome types
//! - [`state`] -- Structure records and the economy snapshot

pub mod actions;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use actions::{Action, ActionOutcome, ActionPayload, ActionRequest};
pub use state::{EconomySnapshot, Structure};
