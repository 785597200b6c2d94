//! The rules engine: validation, resolution, lifecycle, and reporting.
//!
//! ## Control flow
//!
//! A submitted action flows validator -> resolver -> history. The
//! validator is a pure predicate; the resolver mutates state only for
//! actions that passed. `end_turn` runs the turn lifecycle, which owns
//! the deck-out win condition. Once the match is terminal the result
//! reporter produces the reward summary and the validator blocks all
//! further mutation.
//!
//! ## Key Types
//!
//! - `BattleEngine`: per-match facade (`execute_action`, `game_state`,
//!   `battle_result`)
//! - `AbilityTable` / `AbilityEffect`: name-keyed capability table
//! - `RuleViolation`: why an action was rejected
//! - `BattleReport` / `SeatRewards`: terminal reward summary

pub mod abilities;
pub mod battle;
pub mod error;
pub mod report;
pub mod validator;

mod resolver;
mod turn;

pub use abilities::{AbilityEffect, AbilityTable, ABILITY_COST};
pub use battle::BattleEngine;
pub use error::RuleViolation;
pub use report::{BattleReport, SeatRewards};
pub use validator::validate;
