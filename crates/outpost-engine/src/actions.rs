//! Action processing: translating classified actions into state mutations.
//!
//! The effect table is a closed enumeration over [`Action`]:
//!
//! | action     | counter effect             | structure appended? |
//! |------------|----------------------------|---------------------|
//! | `build`    | minerals -= 10             | yes, random site    |
//! | `upgrade`  | energy -= 5                | no                  |
//! | `research` | minerals -= 5, energy -= 5 | no                  |
//! | (other)    | none                       | no                  |
//!
//! Costs come from [`EconomyConfig`] with the defaults above. Adding a
//! new action is a new enum variant and one match arm, not a new
//! abstraction layer. Every call reports success: insufficient
//! resources never block an action, and an unrecognized name is an
//! explicit, logged no-op.

use outpost_types::{Action, ActionOutcome, Structure};
use rand::Rng;
use tracing::debug;

use crate::config::EconomyConfig;
use crate::economy::EconomyState;

/// Interprets actions and applies their effects to an [`EconomyState`].
///
/// Holds no memory between calls; each action is processed
/// independently of prior actions except through the shared counters.
#[derive(Debug, Clone)]
pub struct ActionProcessor {
    /// Mineral delta applied by `build` (negative).
    build_minerals: i64,
    /// Energy delta applied by `upgrade` (negative).
    upgrade_energy: i64,
    /// Mineral delta applied by `research` (negative).
    research_minerals: i64,
    /// Energy delta applied by `research` (negative).
    research_energy: i64,
    /// Half-width of the square placement region for new structures.
    placement_half_range: f64,
}

impl ActionProcessor {
    /// Create a processor with the effect table from the given config.
    pub fn new(config: &EconomyConfig) -> Self {
        Self {
            build_minerals: debit(config.build_mineral_cost),
            upgrade_energy: debit(config.upgrade_energy_cost),
            research_minerals: debit(config.research_mineral_cost),
            research_energy: debit(config.research_energy_cost),
            placement_half_range: config.placement_half_range,
        }
    }

    /// Apply one action to the state and report the outcome.
    ///
    /// Performs exactly one [`EconomyState::apply_delta`] call, except
    /// for [`Action::Unknown`] which performs none. Callers must hold
    /// exclusive access to the state for the duration of the call; see
    /// [`SharedEconomy`](crate::shared::SharedEconomy).
    pub fn process(&self, state: &mut EconomyState, action: &Action) -> ActionOutcome {
        match action {
            Action::Build { kind } => {
                let (x, z) = self.random_site();
                debug!(kind = %kind, x, z, "placing structure");
                state.apply_delta(
                    self.build_minerals,
                    0,
                    Some(Structure {
                        x,
                        z,
                        kind: kind.clone(),
                    }),
                );
            }
            Action::Upgrade => state.apply_delta(0, self.upgrade_energy, None),
            Action::Research => {
                state.apply_delta(self.research_minerals, self.research_energy, None);
            }
            Action::Unknown { name } => {
                // Deliberate no-op: unrecognized names are accepted and ignored.
                debug!(action = %name, "ignoring unrecognized action");
            }
        }
        ActionOutcome::applied()
    }

    /// Pick a random placement site within the configured square region.
    fn random_site(&self) -> (f64, f64) {
        let mut rng = rand::rng();
        let x = rng.random_range(-self.placement_half_range..=self.placement_half_range);
        let z = rng.random_range(-self.placement_half_range..=self.placement_half_range);
        (x, z)
    }
}

/// Convert an unsigned cost into the signed delta that debits it.
fn debit(cost: u32) -> i64 {
    i64::from(cost).saturating_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_engine() -> (ActionProcessor, EconomyState) {
        let config = EconomyConfig::default();
        (ActionProcessor::new(&config), EconomyState::new(&config))
    }

    #[test]
    fn build_debits_minerals_and_places_structure() {
        let (processor, mut state) = make_engine();
        let outcome = processor.process(
            &mut state,
            &Action::Build {
                kind: String::from("mine"),
            },
        );
        assert!(outcome.success);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.minerals, 90);
        assert_eq!(snapshot.energy, 50);
        assert_eq!(snapshot.buildings.len(), 1);

        let built = snapshot.buildings.first();
        assert_eq!(built.map(|b| b.kind.as_str()), Some("mine"));
        assert!(built.is_some_and(|b| (-2.0..=2.0).contains(&b.x)));
        assert!(built.is_some_and(|b| (-2.0..=2.0).contains(&b.z)));
    }

    #[test]
    fn upgrade_debits_energy_only() {
        let (processor, mut state) = make_engine();
        let outcome = processor.process(&mut state, &Action::Upgrade);
        assert!(outcome.success);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.minerals, 100);
        assert_eq!(snapshot.energy, 45);
        assert!(snapshot.buildings.is_empty());
    }

    #[test]
    fn research_debits_both_counters() {
        let (processor, mut state) = make_engine();
        let outcome = processor.process(&mut state, &Action::Research);
        assert!(outcome.success);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.minerals, 95);
        assert_eq!(snapshot.energy, 45);
        assert!(snapshot.buildings.is_empty());
    }

    #[test]
    fn unknown_action_is_a_successful_noop() {
        let (processor, mut state) = make_engine();
        let outcome = processor.process(
            &mut state,
            &Action::Unknown {
                name: String::from("terraform"),
            },
        );
        assert!(outcome.success);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.minerals, 100);
        assert_eq!(snapshot.energy, 50);
        assert!(snapshot.buildings.is_empty());
    }

    #[test]
    fn scenario_build_upgrade_research() {
        let (processor, mut state) = make_engine();

        processor.process(
            &mut state,
            &Action::Build {
                kind: String::from("mine"),
            },
        );
        let snapshot = state.snapshot();
        assert_eq!(snapshot.minerals, 90);
        assert_eq!(snapshot.buildings.len(), 1);
        assert_eq!(
            snapshot.buildings.first().map(|b| b.kind.as_str()),
            Some("mine")
        );

        processor.process(&mut state, &Action::Upgrade);
        assert_eq!(state.snapshot().energy, 45);

        processor.process(&mut state, &Action::Research);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.minerals, 85);
        assert_eq!(snapshot.energy, 40);
    }

    #[test]
    fn serial_accounting_is_order_independent() {
        let forward = [
            Action::Build {
                kind: String::from("mine"),
            },
            Action::Upgrade,
            Action::Research,
            Action::Build {
                kind: String::from("solar"),
            },
            Action::Research,
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let (processor, mut state_a) = make_engine();
        for action in &forward {
            processor.process(&mut state_a, action);
        }
        let (_, mut state_b) = make_engine();
        for action in &reversed {
            processor.process(&mut state_b, action);
        }

        // 100 - 2*10 - 2*5 minerals, 50 - 5 - 2*5 energy, either order.
        let a = state_a.snapshot();
        let b = state_b.snapshot();
        assert_eq!(a.minerals, 70);
        assert_eq!(a.energy, 35);
        assert_eq!(a.buildings.len(), 2);
        assert_eq!(b.minerals, a.minerals);
        assert_eq!(b.energy, a.energy);
        assert_eq!(b.buildings.len(), a.buildings.len());
    }

    #[test]
    fn costs_follow_configuration() {
        let config = EconomyConfig {
            build_mineral_cost: 25,
            ..EconomyConfig::default()
        };
        let processor = ActionProcessor::new(&config);
        let mut state = EconomyState::new(&config);

        processor.process(
            &mut state,
            &Action::Build {
                kind: String::from("refinery"),
            },
        );
        assert_eq!(state.snapshot().minerals, 75);
    }

    #[test]
    fn placement_stays_inside_configured_region() {
        let config = EconomyConfig {
            placement_half_range: 0.5,
            ..EconomyConfig::default()
        };
        let processor = ActionProcessor::new(&config);
        let mut state = EconomyState::new(&config);

        for _ in 0..64 {
            processor.process(
                &mut state,
                &Action::Build {
                    kind: String::from("hab"),
                },
            );
        }
        let snapshot = state.snapshot();
        assert_eq!(snapshot.buildings.len(), 64);
        assert!(snapshot
            .buildings
            .iter()
            .all(|b| (-0.5..=0.5).contains(&b.x) && (-0.5..=0.5).contains(&b.z)));
    }
}
