//! # pattern-duel
//!
//! Authoritative engine for two-player, turn-based pattern card battles.
//!
//! The engine owns one match at a time: it validates every submitted
//! action against the current state, resolves accepted actions, runs the
//! turn lifecycle, and reports the reward summary once the match is
//! decided. Everything else - transport between remote clients, session
//! and room lifecycle, turn-timer enforcement, rendering, and profile
//! persistence - belongs to outside collaborators that talk to the
//! engine through `BattleEngine`.
//!
//! ## Design Principles
//!
//! 1. **All inputs are untrusted**: `execute_action` returns `false` on
//!    anything illegal, with zero state mutation. Actions are
//!    all-or-nothing.
//!
//! 2. **Templates are shared, instances are owned**: card templates are
//!    immutable and shared via `Arc`; every mutable bit of card state
//!    lives on the match-scoped instance.
//!
//! 3. **Snapshots, not references**: `game_state()` hands out deep
//!    clones. External callers cannot bypass the validator by mutating
//!    returned state.
//!
//! 4. **Synchronous and single-threaded**: one action is fully resolved
//!    before the next is accepted. Each match is an isolated state
//!    instance; serializing concurrent submissions is the relay's job.
//!
//! ## Modules
//!
//! - `catalog`: static card templates and their registry
//! - `cards`: match-scoped instances, stat derivation, deck building
//! - `core`: seats, ids, actions, RNG, configuration
//! - `state`: boards, resources, and the full match state
//! - `engine`: validator, resolver, turn lifecycle, abilities, reporting

pub mod catalog;
pub mod cards;
pub mod core;
pub mod engine;
pub mod state;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use crate::catalog::{
    Ability, BaseStats, CardTemplate, Element, PatternKind, Rarity, TemplateId, TemplateRegistry,
};

pub use crate::cards::{instantiate_deck, CardInstance};

pub use crate::core::{Action, ActionRecord, InstanceId, MatchConfig, MatchRng, Seat, SeatMap};

pub use crate::state::{
    Board, MatchState, Meter, Phase, ResourceKind, Resources, WinCondition, Zone, FIELD_SLOTS,
};

pub use crate::engine::{
    AbilityEffect, AbilityTable, BattleEngine, BattleReport, RuleViolation, SeatRewards,
    ABILITY_COST,
};
