//! One seat's board: field slots, hand, deck, graveyard.
//!
//! Zone membership is ownership: a card instance lives inside exactly one
//! of the four containers, and every transition moves the value. There is
//! no shared index to fall out of sync.
//!
//! The field is a fixed array of five slots; the hand and graveyard are
//! growable; the deck is drawn from the front.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::InstanceId;

/// Field slots per side.
pub const FIELD_SLOTS: usize = 5;

/// The zone a card occupies, for lookups and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Deck,
    Hand,
    Field,
    Graveyard,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Deck => write!(f, "deck"),
            Zone::Hand => write!(f, "hand"),
            Zone::Field => write!(f, "field"),
            Zone::Graveyard => write!(f, "graveyard"),
        }
    }
}

/// One seat's card zones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    field: [Option<CardInstance>; FIELD_SLOTS],
    hand: Vec<CardInstance>,
    deck: VecDeque<CardInstance>,
    graveyard: Vec<CardInstance>,
}

impl Board {
    /// Create a board with an empty field and hand and the given deck.
    #[must_use]
    pub fn new(deck: VecDeque<CardInstance>) -> Self {
        Self {
            field: std::array::from_fn(|_| None),
            hand: Vec::new(),
            deck,
            graveyard: Vec::new(),
        }
    }

    // === Reads ===

    /// The field slots in position order.
    #[must_use]
    pub fn field(&self) -> &[Option<CardInstance>] {
        &self.field
    }

    /// The hand in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    /// The graveyard.
    #[must_use]
    pub fn graveyard(&self) -> &[CardInstance] {
        &self.graveyard
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// The card in a field slot, if any.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&CardInstance> {
        self.field.get(index).and_then(Option::as_ref)
    }

    /// The card in a field slot, mutably.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut CardInstance> {
        self.field.get_mut(index).and_then(Option::as_mut)
    }

    /// Number of occupied field slots.
    #[must_use]
    pub fn occupied_slots(&self) -> usize {
        self.field.iter().flatten().count()
    }

    /// Total cards across all four zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.occupied_slots() + self.deck.len() + self.graveyard.len()
    }

    /// Find a card in the hand.
    #[must_use]
    pub fn hand_card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Find a card on the field.
    #[must_use]
    pub fn fielded(&self, id: InstanceId) -> Option<&CardInstance> {
        self.field.iter().flatten().find(|c| c.id == id)
    }

    /// Find a card on the field, mutably.
    pub fn fielded_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.field.iter_mut().flatten().find(|c| c.id == id)
    }

    /// The slot index a fielded card occupies.
    #[must_use]
    pub fn field_position(&self, id: InstanceId) -> Option<usize> {
        self.field
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|c| c.id == id))
    }

    /// Which zone a card is in, if it is on this board at all.
    #[must_use]
    pub fn zone_of(&self, id: InstanceId) -> Option<Zone> {
        if self.hand_card(id).is_some() {
            Some(Zone::Hand)
        } else if self.fielded(id).is_some() {
            Some(Zone::Field)
        } else if self.deck.iter().any(|c| c.id == id) {
            Some(Zone::Deck)
        } else if self.graveyard.iter().any(|c| c.id == id) {
            Some(Zone::Graveyard)
        } else {
            None
        }
    }

    /// Iterate over fielded cards, mutably.
    pub fn field_cards_mut(&mut self) -> impl Iterator<Item = &mut CardInstance> {
        self.field.iter_mut().flatten()
    }

    // === Zone transitions ===

    /// Draw the front card of the deck into the hand.
    ///
    /// Returns the drawn card's ID, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<InstanceId> {
        let card = self.deck.pop_front()?;
        let id = card.id;
        self.hand.push(card);
        Some(id)
    }

    /// Remove a card from the hand.
    #[must_use]
    pub fn take_from_hand(&mut self, id: InstanceId) -> Option<CardInstance> {
        let index = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(index))
    }

    /// Place a card into an empty field slot.
    ///
    /// Panics if the slot is occupied or out of range; the validator
    /// screens both before any placement is attempted.
    pub fn place_on_field(&mut self, slot: usize, mut card: CardInstance) {
        assert!(slot < FIELD_SLOTS, "field slot {} out of range", slot);
        assert!(self.field[slot].is_none(), "field slot {} occupied", slot);

        card.position = Some(slot);
        self.field[slot] = Some(card);
    }

    /// Move the card in a field slot to the graveyard, clearing its
    /// battle state.
    ///
    /// Returns the buried card's ID, or `None` if the slot was empty.
    pub fn bury(&mut self, slot: usize) -> Option<InstanceId> {
        let mut card = self.field.get_mut(slot)?.take()?;
        card.clear_battle_state();
        let id = card.id;
        self.graveyard.push(card);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BaseStats, CardTemplate, Element, PatternKind, Rarity, TemplateId};
    use std::sync::Arc;

    fn card(id: u32) -> CardInstance {
        CardInstance::from_template(
            InstanceId::new(id),
            Arc::new(CardTemplate::new(
                TemplateId::new(id),
                format!("Pattern {}", id),
                Rarity::Common,
                PatternKind::Behavioral,
                Element::Computation,
                BaseStats {
                    complexity: 40,
                    effectiveness: 50,
                    flexibility: 30,
                    performance: 50,
                    scalability: 40,
                },
            )),
        )
    }

    fn board_with_deck(ids: impl IntoIterator<Item = u32>) -> Board {
        Board::new(ids.into_iter().map(card).collect())
    }

    #[test]
    fn test_draw_from_front() {
        let mut board = board_with_deck([1, 2, 3]);

        assert_eq!(board.draw(), Some(InstanceId::new(1)));
        assert_eq!(board.draw(), Some(InstanceId::new(2)));
        assert_eq!(board.hand().len(), 2);
        assert_eq!(board.deck_size(), 1);
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut board = board_with_deck([]);
        assert_eq!(board.draw(), None);
    }

    #[test]
    fn test_hand_to_field() {
        let mut board = board_with_deck([1]);
        board.draw();

        let taken = board.take_from_hand(InstanceId::new(1)).unwrap();
        board.place_on_field(2, taken);

        assert!(board.hand().is_empty());
        assert_eq!(board.occupied_slots(), 1);
        assert_eq!(board.slot(2).unwrap().id, InstanceId::new(1));
        assert_eq!(board.slot(2).unwrap().position, Some(2));
        assert_eq!(board.field_position(InstanceId::new(1)), Some(2));
    }

    #[test]
    fn test_take_missing_card() {
        let mut board = board_with_deck([1]);
        assert!(board.take_from_hand(InstanceId::new(1)).is_none());
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_place_on_occupied_slot_panics() {
        let mut board = board_with_deck([1, 2]);
        board.draw();
        board.draw();

        let first = board.take_from_hand(InstanceId::new(1)).unwrap();
        board.place_on_field(0, first);

        let second = board.take_from_hand(InstanceId::new(2)).unwrap();
        board.place_on_field(0, second);
    }

    #[test]
    fn test_bury_clears_battle_state() {
        let mut board = board_with_deck([1]);
        board.draw();

        let mut taken = board.take_from_hand(InstanceId::new(1)).unwrap();
        taken.exhausted = true;
        taken.grant_temp_attack(2);
        board.place_on_field(0, taken);

        let buried = board.bury(0).unwrap();
        assert_eq!(buried, InstanceId::new(1));
        assert!(board.slot(0).is_none());

        let card = &board.graveyard()[0];
        assert_eq!(card.position, None);
        assert!(!card.exhausted);
        assert_eq!(card.temp_attack, 0);
        assert!(!card.buffed);
    }

    #[test]
    fn test_bury_empty_slot() {
        let mut board = board_with_deck([]);
        assert_eq!(board.bury(0), None);
    }

    #[test]
    fn test_card_count_is_conserved() {
        let mut board = board_with_deck([1, 2, 3, 4]);
        assert_eq!(board.card_count(), 4);

        board.draw();
        board.draw();
        assert_eq!(board.card_count(), 4);

        let taken = board.take_from_hand(InstanceId::new(1)).unwrap();
        board.place_on_field(0, taken);
        assert_eq!(board.card_count(), 4);

        board.bury(0);
        assert_eq!(board.card_count(), 4);
    }

    #[test]
    fn test_zone_of() {
        let mut board = board_with_deck([1, 2]);
        board.draw();

        assert_eq!(board.zone_of(InstanceId::new(1)), Some(Zone::Hand));
        assert_eq!(board.zone_of(InstanceId::new(2)), Some(Zone::Deck));
        assert_eq!(board.zone_of(InstanceId::new(9)), None);

        let taken = board.take_from_hand(InstanceId::new(1)).unwrap();
        board.place_on_field(4, taken);
        assert_eq!(board.zone_of(InstanceId::new(1)), Some(Zone::Field));

        board.bury(4);
        assert_eq!(board.zone_of(InstanceId::new(1)), Some(Zone::Graveyard));
    }
}
