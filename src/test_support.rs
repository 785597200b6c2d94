//! Shared fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::catalog::{BaseStats, CardTemplate, Element, PatternKind, Rarity, TemplateId};
use crate::cards::CardInstance;
use crate::core::{InstanceId, MatchConfig, Seat, SeatMap};
use crate::state::MatchState;

/// A level-1 template with one ability and the given complexity.
///
/// With the other stats fixed, instances come out at attack 55,
/// defense/health scaling with complexity, memory cost ceil(c / 20).
pub fn battle_template(id: u32, complexity: u32) -> Arc<CardTemplate> {
    Arc::new(
        CardTemplate::new(
            TemplateId::new(id),
            format!("Pattern {}", id),
            Rarity::Common,
            PatternKind::Behavioral,
            Element::Computation,
            BaseStats {
                complexity,
                effectiveness: 50,
                flexibility: 30,
                performance: 50,
                scalability: 40,
            },
        )
        .with_ability("Sequential Analysis", "Draw a card."),
    )
}

/// An unshuffled deck of `count` instances with sequential ids.
pub fn deck_of(first_id: u32, count: u32, complexity: u32) -> VecDeque<CardInstance> {
    (0..count)
        .map(|i| {
            CardInstance::from_template(
                InstanceId::new(first_id + i),
                battle_template(first_id + i, complexity),
            )
        })
        .collect()
}

/// An opening state with 10-card decks of the given complexity.
/// P1 holds ids 0..3 in hand, P2 holds 100..103.
pub fn fixture_state(complexity: u32) -> MatchState {
    MatchState::new(
        SeatMap::from_values(deck_of(0, 10, complexity), deck_of(100, 10, complexity)),
        &MatchConfig::default(),
    )
}

/// An opening state with cost-1 cards.
pub fn fresh_state() -> MatchState {
    fixture_state(20)
}

/// An opening state where `seat`'s deck is already empty (its three
/// cards were all drawn into the opening hand).
pub fn empty_deck_state(seat: Seat) -> MatchState {
    let (p1_count, p2_count) = match seat {
        Seat::P1 => (3, 10),
        Seat::P2 => (10, 3),
    };
    MatchState::new(
        SeatMap::from_values(deck_of(0, p1_count, 20), deck_of(100, p2_count, 20)),
        &MatchConfig::default(),
    )
}

/// Move a card from `seat`'s hand straight onto the field, bypassing
/// action resolution. Returns the card's id.
pub fn field_card(state: &mut MatchState, seat: Seat, slot: usize) -> InstanceId {
    let id = state.board(seat).hand()[0].id;
    let card = state
        .board_mut(seat)
        .take_from_hand(id)
        .expect("fixture card in hand");
    state.board_mut(seat).place_on_field(slot, card);
    id
}
