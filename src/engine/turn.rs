//! Turn lifecycle: end-of-turn sequence and the deck-out win condition.
//!
//! The sequence on `end_turn` is fixed: End phase, expire the departing
//! seat's temporary buffs, switch seats, bump the turn counter, grow and
//! refill the new seat's resources, untap its field, then the forced
//! draw. A seat whose deck is empty at the forced draw loses on the
//! spot; otherwise the new turn opens in Main.

use crate::core::{MatchConfig, Seat};
use crate::state::{MatchState, Phase, WinCondition};

/// Run the end-of-turn sequence for the current seat.
pub(crate) fn advance_turn(state: &mut MatchState, config: &MatchConfig) {
    state.phase = Phase::End;

    let departing = state.current_turn;
    for card in state.board_mut(departing).field_cards_mut() {
        card.expire_temp_effects();
    }

    let next = departing.opponent();
    state.current_turn = next;
    state.turn_number += 1;

    let memory_max = config.memory_cap.min(state.turn_number);
    state.resources_mut(next).begin_turn(memory_max);

    for card in state.board_mut(next).field_cards_mut() {
        card.untap();
    }

    if state.board(next).deck_size() == 0 {
        deck_out(state, next);
        return;
    }
    state.board_mut(next).draw();

    state.turn_timer_secs = Some(config.turn_time_secs);
    state.phase = Phase::Main;
}

fn deck_out(state: &mut MatchState, loser: Seat) {
    log::debug!("{} must draw from an empty deck", loser);
    state.declare_winner(loser.opponent(), WinCondition::DeckOut);
}
