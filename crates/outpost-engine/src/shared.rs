//! The shared handle that owns the single process-wide economy.
//!
//! [`SharedEconomy`] is the concurrency boundary of the engine: reads
//! and writes go through a [`tokio::sync::RwLock`], so a snapshot never
//! observes a partially-applied delta and concurrent submissions
//! serialize in some total order. The critical section is short and
//! bounded: no I/O and no awaits while the lock is held.

use std::sync::Arc;

use outpost_types::{Action, ActionOutcome, EconomySnapshot};
use tokio::sync::RwLock;

use crate::actions::ActionProcessor;
use crate::config::EconomyConfig;
use crate::economy::EconomyState;

/// Clonable handle to the one live [`EconomyState`].
///
/// Constructed once at process start and injected into whatever serves
/// it; cloning the handle shares the same underlying state.
#[derive(Debug, Clone)]
pub struct SharedEconomy {
    /// The authoritative state, behind the engine's only lock.
    state: Arc<RwLock<EconomyState>>,
    /// The effect table interpreter.
    processor: Arc<ActionProcessor>,
}

impl SharedEconomy {
    /// Create the process-wide economy from configuration.
    pub fn new(config: &EconomyConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(EconomyState::new(config))),
            processor: Arc::new(ActionProcessor::new(config)),
        }
    }

    /// Return a full, consistent copy of the current state.
    pub async fn snapshot(&self) -> EconomySnapshot {
        self.state.read().await.snapshot()
    }

    /// Validate and apply one action atomically.
    ///
    /// The write lock covers the whole interpret-and-mutate sequence,
    /// so the net effect of N concurrent submissions equals their
    /// sequential composition in some order (no lost updates).
    pub async fn submit(&self, action: &Action) -> ActionOutcome {
        let mut state = self.state.write().await;
        self.processor.process(&mut state, action)
    }
}
