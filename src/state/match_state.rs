//! Full match state.
//!
//! `MatchState` is the single authoritative record of a match: both
//! boards, both resource pools, the turn/phase machine, and the action
//! history. It is plain data - legality and mutation rules live in the
//! engine module.
//!
//! External callers only ever see clones of this state; the containers
//! are private so nothing outside the crate can reach a live reference.

use std::collections::VecDeque;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{Action, ActionRecord, MatchConfig, Seat, SeatMap};

use super::board::Board;
use super::resources::Resources;

/// Stage of the turn lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Mulligan,
    Main,
    Combat,
    End,
    GameOver,
}

/// How a finished match was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinCondition {
    /// The loser had to draw from an empty deck.
    DeckOut,
    /// The loser conceded.
    Surrender,
}

/// Authoritative state of one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    boards: SeatMap<Board>,
    resources: SeatMap<Resources>,

    /// The seat whose turn it is.
    pub current_turn: Seat,

    /// Monotonic turn counter, starting at 1.
    pub turn_number: u32,

    /// Current lifecycle stage.
    pub phase: Phase,

    /// Advisory seconds left in the turn. The engine stamps it; the
    /// relay enforces it.
    pub turn_timer_secs: Option<u32>,

    /// Winning seat once the match is decided.
    pub winner: Option<Seat>,

    /// How the match was decided.
    pub win_condition: Option<WinCondition>,

    history: Vector<ActionRecord>,
    sequence: u32,
}

impl MatchState {
    /// Create the opening state: empty fields, opening hands drawn from
    /// the front of each shuffled deck, starting resources, turn 1,
    /// mulligan phase, P1 to act.
    #[must_use]
    pub fn new(decks: SeatMap<VecDeque<CardInstance>>, config: &MatchConfig) -> Self {
        let (p1_deck, p2_deck) = {
            let mut decks = decks;
            let (p1, p2) = decks.split_mut(Seat::P1);
            (std::mem::take(p1), std::mem::take(p2))
        };

        let mut boards = SeatMap::from_values(Board::new(p1_deck), Board::new(p2_deck));
        for seat in Seat::both() {
            for _ in 0..config.starting_hand {
                boards[seat].draw();
            }
        }

        Self {
            boards,
            resources: SeatMap::with_value(Resources::new(
                config.starting_memory,
                config.starting_computation,
            )),
            current_turn: Seat::P1,
            turn_number: 1,
            phase: Phase::Mulligan,
            turn_timer_secs: Some(config.turn_time_secs),
            winner: None,
            win_condition: None,
            history: Vector::new(),
            sequence: 0,
        }
    }

    // === Boards and resources ===

    /// A seat's board.
    #[must_use]
    pub fn board(&self, seat: Seat) -> &Board {
        &self.boards[seat]
    }

    /// A seat's board, mutably.
    pub fn board_mut(&mut self, seat: Seat) -> &mut Board {
        &mut self.boards[seat]
    }

    /// Both boards mutably: `seat`'s first, the opponent's second.
    pub fn boards_split_mut(&mut self, seat: Seat) -> (&mut Board, &mut Board) {
        self.boards.split_mut(seat)
    }

    /// A seat's resources.
    #[must_use]
    pub fn resources(&self, seat: Seat) -> &Resources {
        &self.resources[seat]
    }

    /// A seat's resources, mutably.
    pub fn resources_mut(&mut self, seat: Seat) -> &mut Resources {
        &mut self.resources[seat]
    }

    // === Lifecycle ===

    /// Has the match been decided?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Decide the match. Terminal and sticky: the validator rejects
    /// everything once the phase is `GameOver`.
    pub fn declare_winner(&mut self, winner: Seat, condition: WinCondition) {
        self.winner = Some(winner);
        self.win_condition = Some(condition);
        self.phase = Phase::GameOver;
        self.turn_timer_secs = None;
    }

    // === History ===

    /// Append an accepted action to the history.
    pub fn record(&mut self, seat: Seat, action: Action, turn: u32) {
        let sequence = self.sequence;
        self.sequence += 1;
        self.history
            .push_back(ActionRecord::new(seat, action, turn, sequence));
    }

    /// The accepted-action history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
