//! The authoritative economy state: resource counters and placed structures.
//!
//! [`EconomyState`] is pure storage with read access. It performs no
//! validation; deciding whether a mutation is legal is the action
//! processor's job. Exactly one instance exists per process, owned by
//! [`SharedEconomy`](crate::shared::SharedEconomy).
//!
//! Counters are allowed to go negative: the current effect table never
//! rejects an action for insufficient resources. Underflow is logged so
//! it stays observable, but it is not an error.

use outpost_types::{EconomySnapshot, Structure};
use tracing::warn;

use crate::config::EconomyConfig;

/// The single source of truth: resource counters and the structure list.
#[derive(Debug)]
pub struct EconomyState {
    /// Current mineral counter.
    minerals: i64,
    /// Current energy counter.
    energy: i64,
    /// All placed structures, in insertion order. Only ever grows.
    buildings: Vec<Structure>,
}

impl EconomyState {
    /// Create the starting state from the economy configuration.
    pub const fn new(config: &EconomyConfig) -> Self {
        Self {
            minerals: config.starting_minerals,
            energy: config.starting_energy,
            buildings: Vec::new(),
        }
    }

    /// Return a full, consistent copy of the current state.
    ///
    /// The copy reflects a state that existed at a single instant;
    /// callers holding the copy are isolated from later mutations.
    pub fn snapshot(&self) -> EconomySnapshot {
        EconomySnapshot {
            minerals: self.minerals,
            energy: self.energy,
            buildings: self.buildings.clone(),
        }
    }

    /// Adjust both counters by the given signed amounts and, if a
    /// structure is supplied, append it.
    ///
    /// Always succeeds. Arithmetic saturates at the `i64` bounds, and
    /// no validation happens here. A counter dropping below zero emits
    /// a warning but is otherwise permitted.
    pub fn apply_delta(
        &mut self,
        minerals_delta: i64,
        energy_delta: i64,
        built: Option<Structure>,
    ) {
        self.minerals = self.minerals.saturating_add(minerals_delta);
        self.energy = self.energy.saturating_add(energy_delta);

        if self.minerals < 0 || self.energy < 0 {
            warn!(
                minerals = self.minerals,
                energy = self.energy,
                "resource counter below zero"
            );
        }

        if let Some(structure) = built {
            self.buildings.push(structure);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_structure(kind: &str) -> Structure {
        Structure {
            x: 1.0,
            z: -1.0,
            kind: kind.to_owned(),
        }
    }

    #[test]
    fn starting_snapshot_matches_config() {
        let state = EconomyState::new(&EconomyConfig::default());
        let snapshot = state.snapshot();
        assert_eq!(snapshot.minerals, 100);
        assert_eq!(snapshot.energy, 50);
        assert!(snapshot.buildings.is_empty());
    }

    #[test]
    fn delta_adjusts_both_counters() {
        let mut state = EconomyState::new(&EconomyConfig::default());
        state.apply_delta(-10, -5, None);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.minerals, 90);
        assert_eq!(snapshot.energy, 45);
        assert!(snapshot.buildings.is_empty());
    }

    #[test]
    fn delta_appends_supplied_structure() {
        let mut state = EconomyState::new(&EconomyConfig::default());
        state.apply_delta(-10, 0, Some(make_structure("mine")));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.buildings.len(), 1);
        assert_eq!(
            snapshot.buildings.first().map(|b| b.kind.as_str()),
            Some("mine")
        );
    }

    #[test]
    fn counters_may_go_negative() {
        let mut state = EconomyState::new(&EconomyConfig::default());
        state.apply_delta(-150, -80, None);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.minerals, -50);
        assert_eq!(snapshot.energy, -30);
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut state = EconomyState::new(&EconomyConfig::default());
        let before = state.snapshot();
        state.apply_delta(-10, 0, Some(make_structure("solar")));
        assert_eq!(before.minerals, 100);
        assert!(before.buildings.is_empty());
        assert_eq!(state.snapshot().buildings.len(), 1);
    }
}
