//! Action legality checks.
//!
//! `validate` is a pure predicate over the current state: it never
//! mutates anything, and the resolver is only ever invoked on actions
//! that passed it. All inputs are untrusted; a replayed or stale action
//! fails here by ordinary rules (its card is no longer where the action
//! expects it).

use crate::core::{Action, InstanceId, Seat};
use crate::state::{MatchState, Phase, Zone, FIELD_SLOTS};

use super::abilities::ABILITY_COST;
use super::error::RuleViolation;

/// Check whether an action is legal in the given state.
pub fn validate(state: &MatchState, action: &Action) -> Result<(), RuleViolation> {
    if state.phase == Phase::GameOver {
        return Err(RuleViolation::Terminal);
    }
    if action.seat() != state.current_turn {
        return Err(RuleViolation::Illegal("not the submitter's turn"));
    }

    match *action {
        Action::PlayCard { seat, card, to_slot } => {
            validate_play_card(state, seat, card, to_slot)
        }
        Action::Attack {
            seat,
            attacker,
            target,
        } => validate_attack(state, seat, attacker, target),
        Action::UseAbility {
            seat,
            card,
            ability_index,
        } => validate_use_ability(state, seat, card, ability_index),
        Action::EndTurn { .. } | Action::Surrender { .. } => Ok(()),
    }
}

fn validate_play_card(
    state: &MatchState,
    seat: Seat,
    card: InstanceId,
    to_slot: usize,
) -> Result<(), RuleViolation> {
    let board = state.board(seat);
    let in_hand = board
        .hand_card(card)
        .ok_or_else(|| RuleViolation::not_found(card, Zone::Hand))?;

    if to_slot >= FIELD_SLOTS {
        return Err(RuleViolation::Illegal("field slot out of range"));
    }
    if board.slot(to_slot).is_some() {
        return Err(RuleViolation::Illegal("field slot occupied"));
    }
    if !state
        .resources(seat)
        .memory
        .can_afford(in_hand.memory_cost())
    {
        return Err(RuleViolation::Illegal("insufficient memory"));
    }

    Ok(())
}

fn validate_attack(
    state: &MatchState,
    seat: Seat,
    attacker: InstanceId,
    target: InstanceId,
) -> Result<(), RuleViolation> {
    let attacker_card = state
        .board(seat)
        .fielded(attacker)
        .ok_or_else(|| RuleViolation::not_found(attacker, Zone::Field))?;

    if attacker_card.exhausted {
        return Err(RuleViolation::Illegal("attacker is exhausted"));
    }

    state
        .board(seat.opponent())
        .fielded(target)
        .ok_or_else(|| RuleViolation::not_found(target, Zone::Field))?;

    Ok(())
}

fn validate_use_ability(
    state: &MatchState,
    seat: Seat,
    card: InstanceId,
    ability_index: usize,
) -> Result<(), RuleViolation> {
    let source = state
        .board(seat)
        .fielded(card)
        .ok_or_else(|| RuleViolation::not_found(card, Zone::Field))?;

    if source.exhausted {
        return Err(RuleViolation::Illegal("card is exhausted"));
    }
    if source.template.ability(ability_index).is_none() {
        return Err(RuleViolation::Illegal("no ability at that index"));
    }
    if !state
        .resources(seat)
        .computation
        .can_afford(ABILITY_COST)
    {
        return Err(RuleViolation::Illegal("insufficient computation"));
    }

    Ok(())
}
