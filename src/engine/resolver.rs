//! Action resolution - the mutating half of the engine.
//!
//! The resolver is only invoked on actions the validator has accepted,
//! so each arm applies its full effect unconditionally. Application is
//! all-or-nothing per action; an action either resolves completely or
//! was rejected before any state changed.

use crate::cards::CardInstance;
use crate::core::{Action, InstanceId, MatchConfig, Seat};
use crate::state::{MatchState, Phase, WinCondition};

use super::abilities::{AbilityTable, ABILITY_COST};
use super::turn;

/// Apply a validated action to the match state.
pub(crate) fn resolve(
    state: &mut MatchState,
    abilities: &AbilityTable,
    config: &MatchConfig,
    action: &Action,
) {
    match *action {
        Action::PlayCard { seat, card, to_slot } => play_card(state, seat, card, to_slot),
        Action::Attack {
            seat,
            attacker,
            target,
        } => attack(state, seat, attacker, target),
        Action::UseAbility {
            seat,
            card,
            ability_index,
        } => use_ability(state, abilities, seat, card, ability_index),
        Action::EndTurn { .. } => turn::advance_turn(state, config),
        Action::Surrender { seat } => surrender(state, seat),
    }
}

/// Deploy: hand -> field slot, pay memory, enter exhausted
/// (summoning sickness - the card cannot act the turn it arrives).
fn play_card(state: &mut MatchState, seat: Seat, card: InstanceId, to_slot: usize) {
    let board = state.board_mut(seat);
    let Some(mut card) = board.take_from_hand(card) else {
        return;
    };
    let cost = card.memory_cost();
    card.exhausted = true;
    board.place_on_field(to_slot, card);

    state.resources_mut(seat).memory.spend(cost);
    state.phase = Phase::Main;
}

/// Combat: both damage deltas come from pre-attack stats and are applied
/// symmetrically, so application order cannot change the outcome. Zone
/// transitions happen only after both deltas are in; a mutual kill
/// buries both cards in the same step.
fn attack(state: &mut MatchState, seat: Seat, attacker: InstanceId, target: InstanceId) {
    let (mine, theirs) = state.boards_split_mut(seat);
    let (Some(attacker_slot), Some(target_slot)) = (
        mine.field_position(attacker),
        theirs.field_position(target),
    ) else {
        return;
    };

    let attacker_power = mine.slot(attacker_slot).map_or(0, CardInstance::attack_value);
    let target_power = theirs.slot(target_slot).map_or(0, CardInstance::attack_value);

    if let Some(card) = theirs.slot_mut(target_slot) {
        card.take_damage(attacker_power);
    }
    if let Some(card) = mine.slot_mut(attacker_slot) {
        card.take_damage(target_power);
    }

    if theirs
        .slot(target_slot)
        .is_some_and(CardInstance::is_destroyed)
    {
        theirs.bury(target_slot);
    }
    if mine
        .slot(attacker_slot)
        .is_some_and(CardInstance::is_destroyed)
    {
        mine.bury(attacker_slot);
    } else if let Some(card) = mine.slot_mut(attacker_slot) {
        card.exhausted = true;
    }

    state.phase = Phase::Combat;
}

/// Activate: pay computation, exhaust the source, dispatch by name.
/// Names with no registered handler are a deliberate no-op; the cost and
/// exhaustion apply either way.
fn use_ability(
    state: &mut MatchState,
    abilities: &AbilityTable,
    seat: Seat,
    card: InstanceId,
    ability_index: usize,
) {
    let Some(name) = state
        .board(seat)
        .fielded(card)
        .and_then(|c| c.template.ability(ability_index))
        .map(|a| a.name.clone())
    else {
        return;
    };

    state.resources_mut(seat).computation.spend(ABILITY_COST);
    if let Some(source) = state.board_mut(seat).fielded_mut(card) {
        source.exhausted = true;
    }

    match abilities.get(&name) {
        Some(effect) => effect.apply(state, seat, card),
        None => log::debug!("ability {:?} has no registered handler, no-op", name),
    }

    state.phase = Phase::Main;
}

fn surrender(state: &mut MatchState, seat: Seat) {
    state.declare_winner(seat.opponent(), WinCondition::Surrender);
}
