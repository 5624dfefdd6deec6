//! Action request, classification, and outcome types.
//!
//! The wire format is permissive: `payload` may be absent and
//! unrecognized payload fields are ignored. Classification into the
//! closed [`Action`] enum happens once, at the transport boundary, so
//! the engine only ever sees a well-formed variant.

use serde::{Deserialize, Serialize};

/// A submitted action as it arrives on the wire.
///
/// Matches the body of `POST /api/action`:
/// `{ "action": "build", "payload": { "type": "mine" } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    /// The action name. Unrecognized names are accepted and ignored.
    pub action: String,
    /// Action-specific payload. Optional; unknown fields are dropped.
    #[serde(default)]
    pub payload: ActionPayload,
}

/// The payload carried by an [`ActionRequest`].
///
/// Only `build` reads anything from the payload today. Fields not
/// listed here are silently ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionPayload {
    /// The structure category for a `build` action.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A classified action, ready for the processor.
///
/// The action set is a closed enumeration; the unknown case is an
/// explicit variant so the "unrecognized action is a no-op" contract is
/// a visible branch rather than an implicit fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place a new structure of the given kind.
    Build {
        /// Structure category tag, copied into the placed [`Structure`].
        ///
        /// [`Structure`]: crate::state::Structure
        kind: String,
    },
    /// Improve existing infrastructure.
    Upgrade,
    /// Advance the research track.
    Research,
    /// Any action name outside the table above. Always a no-op.
    Unknown {
        /// The unrecognized action name, kept for logging.
        name: String,
    },
}

impl Action {
    /// Classify a wire request into an [`Action`].
    ///
    /// A `build` request without a `type` field still classifies as
    /// [`Action::Build`] with an empty kind tag; the action applies
    /// normally. This mirrors the permissive wire contract.
    pub fn from_request(request: &ActionRequest) -> Self {
        match request.action.as_str() {
            "build" => Self::Build {
                kind: request.payload.kind.clone().unwrap_or_default(),
            },
            "upgrade" => Self::Upgrade,
            "research" => Self::Research,
            other => Self::Unknown {
                name: other.to_owned(),
            },
        }
    }
}

/// The result of submitting an action.
///
/// Every submission reports success; semantic failures do not exist in
/// the current effect table (insufficient resources never block).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Whether the action was accepted. Always `true` today.
    pub success: bool,
}

impl ActionOutcome {
    /// The outcome of an accepted submission.
    pub const fn applied() -> Self {
        Self { success: true }
    }
}
