//! Rule-violation taxonomy.
//!
//! Every way an action can be rejected maps to one of three categories.
//! `BattleEngine::execute_action` swallows these into a `false` return;
//! `try_action` surfaces them for callers that want the reason. Nothing
//! in the engine treats a violation as fatal.

use thiserror::Error;

use crate::core::InstanceId;
use crate::state::Zone;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// The action is not legal in the current state: wrong turn owner,
    /// occupied or out-of-range slot, insufficient resources, exhausted
    /// actor, or a bad ability index.
    #[error("illegal action: {0}")]
    Illegal(&'static str),

    /// A referenced card is absent from the zone the action expects it in.
    #[error("{card} not found in {zone}")]
    NotFound { card: InstanceId, zone: Zone },

    /// The match is already decided; no further mutation is permitted.
    #[error("match is already over")]
    Terminal,
}

impl RuleViolation {
    /// Shorthand for a `NotFound` violation.
    #[must_use]
    pub fn not_found(card: InstanceId, zone: Zone) -> Self {
        Self::NotFound { card, zone }
    }
}
