//! State and action-processing engine for the Outpost simulation.
//!
//! This crate is the only part of the workspace with decision logic.
//! It owns the authoritative in-memory economy model, the closed table
//! of legal actions and their effects, and the consistency guarantees
//! required when actions arrive concurrently.
//!
//! # Architecture
//!
//! ```text
//! caller --> SharedEconomy::submit --> ActionProcessor::process --> EconomyState::apply_delta
//! caller --> SharedEconomy::snapshot -------------------------------> EconomyState::snapshot
//! ```
//!
//! [`SharedEconomy`] holds the single process-wide [`EconomyState`]
//! behind a write lock, so snapshots never observe a partially-applied
//! delta and concurrent submissions serialize in some total order.
//!
//! [`SharedEconomy`]: shared::SharedEconomy
//! [`EconomyState`]: economy::EconomyState

pub mod actions;
pub mod config;
pub mod economy;
pub mod shared;

// Re-export primary types for convenience.
pub use actions::ActionProcessor;
pub use config::{ConfigError, EconomyConfig, LoggingConfig, OutpostConfig, TransportConfig};
pub use economy::EconomyState;
pub use shared::SharedEconomy;
