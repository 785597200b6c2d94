//! Battle result reporting.
//!
//! Once a match is terminal, the report summarizes the outcome and the
//! per-seat rewards the profile store persists: experience and coins
//! scale with match length, winners earn the higher rate. While the
//! match is live there is no report.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Seat, SeatMap};
use crate::state::{MatchState, WinCondition};

/// Rewards and statistics for one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRewards {
    /// Profile experience earned.
    pub experience: u32,

    /// Coins earned.
    pub coins: u32,

    /// Cards this seat deployed over the match.
    pub cards_played: u32,
}

/// Summary of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub winner: Seat,
    pub win_condition: WinCondition,

    /// Turns elapsed when the match ended.
    pub turns_played: u32,

    /// Per-seat rewards.
    pub rewards: SeatMap<SeatRewards>,
}

/// Build the report for a terminal state; `None` while the match is live.
pub(crate) fn battle_report(state: &MatchState) -> Option<BattleReport> {
    let winner = state.winner?;
    let win_condition = state.win_condition?;
    let turns = state.turn_number;

    let rewards = SeatMap::new(|seat| {
        let (experience_rate, coin_rate) = if seat == winner { (100, 50) } else { (25, 10) };
        let cards_played = state
            .history()
            .iter()
            .filter(|record| {
                record.seat == seat && matches!(record.action, Action::PlayCard { .. })
            })
            .count() as u32;

        SeatRewards {
            experience: experience_rate * turns,
            coins: coin_rate * turns.div_ceil(5),
            cards_played,
        }
    });

    Some(BattleReport {
        winner,
        win_condition,
        turns_played: turns,
        rewards,
    })
}
