//! The battle engine facade.
//!
//! `BattleEngine` owns one match: it builds the opening state from two
//! template decks, accepts submitted actions one at a time, and exposes
//! read-only snapshots and the terminal report. One engine per match;
//! nothing is shared between matches.
//!
//! `execute_action` never raises: any illegal or malformed action
//! returns `false` with zero state mutation. `try_action` is the same
//! operation with the rejection reason surfaced.

use std::sync::Arc;

use crate::catalog::CardTemplate;
use crate::cards::instantiate_deck;
use crate::core::{Action, MatchConfig, MatchRng, SeatMap};
use crate::state::MatchState;

use super::abilities::AbilityTable;
use super::error::RuleViolation;
use super::report::{battle_report, BattleReport};
use super::{resolver, validator};

/// Authoritative engine for one match.
pub struct BattleEngine {
    config: MatchConfig,
    state: MatchState,
    abilities: AbilityTable,
    seed: u64,
}

impl BattleEngine {
    /// Start a match: shuffle and instantiate both decks, draw opening
    /// hands, and hand the first turn to player 1.
    #[must_use]
    pub fn new(
        config: MatchConfig,
        p1_deck: &[Arc<CardTemplate>],
        p2_deck: &[Arc<CardTemplate>],
        seed: u64,
    ) -> Self {
        let mut rng = MatchRng::new(seed);
        let mut next_id = 0;

        let p1 = instantiate_deck(p1_deck, &mut next_id, &mut rng);
        let p2 = instantiate_deck(p2_deck, &mut next_id, &mut rng);
        let state = MatchState::new(SeatMap::from_values(p1, p2), &config);

        Self {
            config,
            state,
            abilities: AbilityTable::with_defaults(),
            seed,
        }
    }

    /// Replace the ability table (builder pattern). The default is the
    /// stock catalog.
    #[must_use]
    pub fn with_abilities(mut self, abilities: AbilityTable) -> Self {
        self.abilities = abilities;
        self
    }

    /// The seed this match was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Submit an action. Returns `true` if it was accepted and fully
    /// applied, `false` if it was rejected with no state change.
    pub fn execute_action(&mut self, action: Action) -> bool {
        match self.try_action(action) {
            Ok(()) => true,
            Err(violation) => {
                log::debug!("rejected action: {}", violation);
                false
            }
        }
    }

    /// Submit an action, surfacing the rejection reason.
    pub fn try_action(&mut self, action: Action) -> Result<(), RuleViolation> {
        validator::validate(&self.state, &action)?;

        let seat = action.seat();
        let turn = self.state.turn_number;
        log::trace!("turn {}: {} {}", turn, seat, action.kind());

        resolver::resolve(&mut self.state, &self.abilities, &self.config, &action);
        self.state.record(seat, action, turn);

        if let (Some(winner), Some(condition)) = (self.state.winner, self.state.win_condition) {
            log::info!(
                "match over on turn {}: {} wins ({:?})",
                self.state.turn_number,
                winner,
                condition
            );
        }

        Ok(())
    }

    /// A defensive snapshot of the full match state. The clone is deep;
    /// mutating it cannot touch the live match.
    #[must_use]
    pub fn game_state(&self) -> MatchState {
        self.state.clone()
    }

    /// The reward summary, once the match is terminal. `None` while the
    /// match is live.
    #[must_use]
    pub fn battle_result(&self) -> Option<BattleReport> {
        battle_report(&self.state)
    }
}
