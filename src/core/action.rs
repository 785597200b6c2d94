//! Action representation and the per-match action log.
//!
//! Actions arrive fully-formed from the relay layer, one per submitted
//! player intent. The engine validates and resolves them one at a time;
//! every accepted action is appended to the match history as an
//! `ActionRecord`.
//!
//! The serialized form is tagged by `type` so the wire shape matches the
//! `{type, playerId, data}` envelope the relay speaks.

use serde::{Deserialize, Serialize};

use super::id::InstanceId;
use super::seat::Seat;

/// A submitted player action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Deploy a card from hand to an empty field slot.
    PlayCard {
        seat: Seat,
        card: InstanceId,
        to_slot: usize,
    },
    /// Attack an opposing fielded card.
    Attack {
        seat: Seat,
        attacker: InstanceId,
        target: InstanceId,
    },
    /// Activate an ability on an own fielded card.
    UseAbility {
        seat: Seat,
        card: InstanceId,
        ability_index: usize,
    },
    /// Pass the turn to the opponent.
    EndTurn { seat: Seat },
    /// Concede the match.
    Surrender { seat: Seat },
}

impl Action {
    /// The seat that submitted this action.
    #[must_use]
    pub fn seat(&self) -> Seat {
        match *self {
            Action::PlayCard { seat, .. }
            | Action::Attack { seat, .. }
            | Action::UseAbility { seat, .. }
            | Action::EndTurn { seat }
            | Action::Surrender { seat } => seat,
        }
    }

    /// Wire name of the action type, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::PlayCard { .. } => "play_card",
            Action::Attack { .. } => "attack",
            Action::UseAbility { .. } => "use_ability",
            Action::EndTurn { .. } => "end_turn",
            Action::Surrender { .. } => "surrender",
        }
    }
}

/// A recorded, accepted action with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took the action.
    pub seat: Seat,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was submitted.
    pub turn: u32,

    /// Sequence number across the match (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: Seat, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            action,
            turn,
            sequence,
        }
    }
}
