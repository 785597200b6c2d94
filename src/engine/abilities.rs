//! Ability capability table.
//!
//! Abilities dispatch by name through a registered table instead of a
//! hardcoded branch: name -> effect, with an explicit no-op for names
//! nothing has registered yet. New effects extend the table without
//! touching the resolver.
//!
//! An unregistered name is not an error. The activation cost and
//! exhaustion still apply; the effect is simply not implemented yet at
//! the product level.

use rustc_hash::FxHashMap;

use crate::core::{InstanceId, Seat};
use crate::state::{MatchState, ResourceKind};

/// Computation cost of any ability activation.
pub const ABILITY_COST: u32 = 1;

/// One registered ability effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbilityEffect {
    /// Draw cards. Stops quietly if the deck runs dry; mid-turn draws
    /// never cause a deck-out loss.
    Draw(u32),

    /// Grant the source a temporary attack bonus until the owner's turn
    /// ends.
    BuffAttack(i32),

    /// Gain a resource, clamped at the meter's maximum.
    GainResource(ResourceKind, u32),
}

impl AbilityEffect {
    /// Apply this effect for `seat`, with `source` as the activating card.
    pub(crate) fn apply(self, state: &mut MatchState, seat: Seat, source: InstanceId) {
        match self {
            AbilityEffect::Draw(count) => {
                let board = state.board_mut(seat);
                for _ in 0..count {
                    if board.draw().is_none() {
                        break;
                    }
                }
            }
            AbilityEffect::BuffAttack(amount) => {
                if let Some(card) = state.board_mut(seat).fielded_mut(source) {
                    card.grant_temp_attack(amount);
                }
            }
            AbilityEffect::GainResource(kind, amount) => {
                state.resources_mut(seat).meter_mut(kind).gain(amount);
            }
        }
    }
}

/// Name-keyed registry of ability effects.
#[derive(Clone, Debug, Default)]
pub struct AbilityTable {
    handlers: FxHashMap<String, AbilityEffect>,
}

impl AbilityTable {
    /// Create an empty table. Every ability name resolves to the no-op.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the stock effect catalog registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register("Sequential Analysis", AbilityEffect::Draw(1));
        table.register("Quick Recall", AbilityEffect::Draw(2));
        table.register("Thought Tracing", AbilityEffect::BuffAttack(2));
        table.register("Output Analysis", AbilityEffect::BuffAttack(1));
        table.register(
            "Context Retention",
            AbilityEffect::GainResource(ResourceKind::Memory, 1),
        );
        table
    }

    /// Register (or replace) a handler for an ability name.
    pub fn register(&mut self, name: impl Into<String>, effect: AbilityEffect) {
        self.handlers.insert(name.into(), effect);
    }

    /// Look up the effect for an ability name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<AbilityEffect> {
        self.handlers.get(name).copied()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
