//! Structure records and the economy snapshot served to clients.

use serde::{Deserialize, Serialize};

/// An immutable record of a built object's position and declared type.
///
/// Coordinates are assigned once at creation time and never change.
/// Structures carry no identity beyond their position in the snapshot's
/// `buildings` sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    /// Planar X coordinate of the placement site.
    pub x: f64,
    /// Planar Z coordinate of the placement site.
    pub z: f64,
    /// Category tag, copied verbatim from the triggering action's payload.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A complete, point-in-time read-only copy of the economy state.
///
/// This is the exact shape returned by `GET /api/state`. Clients are
/// expected to replace their whole view of the world with each snapshot
/// rather than diffing against the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomySnapshot {
    /// Current mineral counter. May be negative (underflow is permitted).
    pub minerals: i64,
    /// Current energy counter. May be negative (underflow is permitted).
    pub energy: i64,
    /// All placed structures, in insertion order.
    pub buildings: Vec<Structure>,
}
