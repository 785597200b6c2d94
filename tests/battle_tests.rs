//! End-to-end battle scenarios through the `BattleEngine` facade.
//!
//! These drive full matches the way the relay would: submit actions,
//! read snapshots, check the terminal report.

use std::sync::Arc;

use pattern_duel::{
    Action, BaseStats, BattleEngine, CardTemplate, Element, MatchConfig, PatternKind, Phase,
    Rarity, RuleViolation, Seat, TemplateId, WinCondition, Zone,
};

/// A level-1 template with one ability. With the other stats fixed,
/// instances come out at attack 55 and memory cost ceil(complexity/20).
fn template(id: u32, complexity: u32) -> Arc<CardTemplate> {
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

fn deck(first_id: u32, count: u32, complexity: u32) -> Vec<Arc<CardTemplate>> {
    (0..count).map(|i| template(first_id + i, complexity)).collect()
}

/// 10-card cost-1 decks on both sides.
fn standard_engine() -> BattleEngine {
    BattleEngine::new(MatchConfig::default(), &deck(0, 10, 20), &deck(100, 10, 20), 42)
}

fn play_first_hand_card(engine: &mut BattleEngine, seat: Seat, slot: usize) -> pattern_duel::InstanceId {
    let card = engine.game_state().board(seat).hand()[0].id;
    assert!(engine.execute_action(Action::PlayCard {
        seat,
        card,
        to_slot: slot,
    }));
    card
}

/// Scenario A: a play costing 2 memory with only 1 available is rejected
/// and nothing changes.
#[test]
fn test_insufficient_memory_rejected_without_mutation() {
    let mut engine = BattleEngine::new(
        MatchConfig::default(),
        &deck(0, 10, 40), // cost 2
        &deck(100, 10, 40),
        42,
    );

    let before = engine.game_state();
    assert_eq!(before.resources(Seat::P1).memory.current, 1);

    let card = before.board(Seat::P1).hand()[0].id;
    let action = Action::PlayCard {
        seat: Seat::P1,
        card,
        to_slot: 0,
    };

    assert_eq!(
        engine.try_action(action.clone()),
        Err(RuleViolation::Illegal("insufficient memory"))
    );
    assert!(!engine.execute_action(action));

    let after = engine.game_state();
    assert_eq!(after.board(Seat::P1).hand().len(), 3);
    assert_eq!(after.board(Seat::P1).occupied_slots(), 0);
    assert_eq!(after.resources(Seat::P1).memory.current, 1);
    assert_eq!(after, before);
}

/// Scenario B: a card cannot attack the turn it is deployed.
#[test]
fn test_summoning_sickness() {
    let mut engine = standard_engine();
    let card = play_first_hand_card(&mut engine, Seat::P1, 0);

    let target = engine.game_state().board(Seat::P2).hand()[0].id;
    let result = engine.try_action(Action::Attack {
        seat: Seat::P1,
        attacker: card,
        target,
    });

    assert_eq!(result, Err(RuleViolation::Illegal("attacker is exhausted")));
    assert!(engine
        .game_state()
        .board(Seat::P1)
        .slot(0)
        .unwrap()
        .exhausted);
}

/// The same card attacks fine after its owner's next untap.
#[test]
fn test_attack_after_untap() {
    let mut engine = standard_engine();

    let attacker = play_first_hand_card(&mut engine, Seat::P1, 0);
    assert!(engine.execute_action(Action::EndTurn { seat: Seat::P1 }));

    let target = play_first_hand_card(&mut engine, Seat::P2, 0);
    assert!(engine.execute_action(Action::EndTurn { seat: Seat::P2 }));

    assert!(!engine
        .game_state()
        .board(Seat::P1)
        .slot(0)
        .unwrap()
        .exhausted);
    assert!(engine.execute_action(Action::Attack {
        seat: Seat::P1,
        attacker,
        target,
    }));
    assert_eq!(engine.game_state().phase, Phase::Combat);
}

/// Scenario C: equal-stat instances destroy each other simultaneously;
/// both leave the field and land in their owners' graveyards.
#[test]
fn test_mutual_destruction() {
    let mut engine = standard_engine();

    let attacker = play_first_hand_card(&mut engine, Seat::P1, 0);
    assert!(engine.execute_action(Action::EndTurn { seat: Seat::P1 }));
    let target = play_first_hand_card(&mut engine, Seat::P2, 0);
    assert!(engine.execute_action(Action::EndTurn { seat: Seat::P2 }));

    assert!(engine.execute_action(Action::Attack {
        seat: Seat::P1,
        attacker,
        target,
    }));

    let state = engine.game_state();
    assert_eq!(state.board(Seat::P1).occupied_slots(), 0);
    assert_eq!(state.board(Seat::P2).occupied_slots(), 0);
    assert_eq!(state.board(Seat::P1).zone_of(attacker), Some(Zone::Graveyard));
    assert_eq!(state.board(Seat::P2).zone_of(target), Some(Zone::Graveyard));
}

/// Scenario D: switching into a seat with an empty deck is an immediate
/// deck-out loss.
#[test]
fn test_deck_out() {
    // P2's three cards are all drawn into the opening hand.
    let mut engine = BattleEngine::new(
        MatchConfig::default(),
        &deck(0, 10, 20),
        &deck(100, 3, 20),
        42,
    );
    assert_eq!(engine.game_state().board(Seat::P2).deck_size(), 0);

    assert!(engine.execute_action(Action::EndTurn { seat: Seat::P1 }));

    let state = engine.game_state();
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.winner, Some(Seat::P1));
    assert_eq!(state.win_condition, Some(WinCondition::DeckOut));

    let report = engine.battle_result().unwrap();
    assert_eq!(report.winner, Seat::P1);
    assert_eq!(report.win_condition, WinCondition::DeckOut);
}

/// Scenario E: after game over every action is rejected and the snapshot
/// is byte-for-byte unchanged.
#[test]
fn test_terminal_state_is_sticky() {
    let mut engine = standard_engine();
    assert!(engine.execute_action(Action::Surrender { seat: Seat::P1 }));
    assert!(engine.battle_result().is_some());

    let before = serde_json::to_string(&engine.game_state()).unwrap();

    let card = engine.game_state().board(Seat::P2).hand()[0].id;
    assert!(!engine.execute_action(Action::EndTurn { seat: Seat::P2 }));
    assert!(!engine.execute_action(Action::PlayCard {
        seat: Seat::P2,
        card,
        to_slot: 0,
    }));
    assert!(!engine.execute_action(Action::Surrender { seat: Seat::P2 }));
    assert_eq!(
        engine.try_action(Action::EndTurn { seat: Seat::P1 }),
        Err(RuleViolation::Terminal)
    );

    let after = serde_json::to_string(&engine.game_state()).unwrap();
    assert_eq!(before, after);
}

/// Surrender awards the match to the opponent with winner-rate rewards.
#[test]
fn test_surrender_rewards() {
    let mut engine = standard_engine();

    assert!(engine.execute_action(Action::EndTurn { seat: Seat::P1 }));
    assert!(engine.execute_action(Action::EndTurn { seat: Seat::P2 }));
    assert!(engine.execute_action(Action::Surrender { seat: Seat::P1 }));

    let report = engine.battle_result().unwrap();
    assert_eq!(report.winner, Seat::P2);
    assert_eq!(report.win_condition, WinCondition::Surrender);
    assert_eq!(report.turns_played, 3);
    assert_eq!(report.rewards[Seat::P2].experience, 300); // 100 * 3
    assert_eq!(report.rewards[Seat::P2].coins, 50); // 50 * ceil(3/5)
    assert_eq!(report.rewards[Seat::P1].experience, 75); // 25 * 3
    assert_eq!(report.rewards[Seat::P1].coins, 10);
}

/// Abilities through the facade: draw effect, cost, and exhaustion.
#[test]
fn test_ability_activation() {
    let mut engine = standard_engine();

    let card = play_first_hand_card(&mut engine, Seat::P1, 0);
    assert!(engine.execute_action(Action::EndTurn { seat: Seat::P1 }));
    assert!(engine.execute_action(Action::EndTurn { seat: Seat::P2 }));

    let hand_before = engine.game_state().board(Seat::P1).hand().len();
    assert!(engine.execute_action(Action::UseAbility {
        seat: Seat::P1,
        card,
        ability_index: 0,
    }));

    let state = engine.game_state();
    assert_eq!(state.board(Seat::P1).hand().len(), hand_before + 1);
    assert_eq!(state.resources(Seat::P1).computation.current, 2);
    assert!(state.board(Seat::P1).slot(0).unwrap().exhausted);

    // Exhausted again; a second activation this turn is rejected.
    assert_eq!(
        engine.try_action(Action::UseAbility {
            seat: Seat::P1,
            card,
            ability_index: 0,
        }),
        Err(RuleViolation::Illegal("card is exhausted"))
    );
}

/// A replayed play_card is rejected by ordinary validation: the card is
/// no longer in hand.
#[test]
fn test_duplicate_action_rejected() {
    let mut engine = standard_engine();
    let card = play_first_hand_card(&mut engine, Seat::P1, 0);

    let replay = Action::PlayCard {
        seat: Seat::P1,
        card,
        to_slot: 1,
    };
    assert_eq!(
        engine.try_action(replay),
        Err(RuleViolation::NotFound {
            card,
            zone: Zone::Hand,
        })
    );
}

/// Drive a scripted match to completion: every turn the active seat
/// deploys what it can afford, attacks where possible, and passes.
/// Conservation and slot bounds hold after every accepted action, and
/// the match ends by deck-out.
#[test]
fn test_full_match_to_deck_out() {
    let mut engine = standard_engine();
    let mut safety = 0;

    while engine.battle_result().is_none() {
        safety += 1;
        assert!(safety < 500, "match did not terminate");

        let state = engine.game_state();
        let seat = state.current_turn;

        // Deploy the first affordable hand card into the first free slot.
        let affordable = state
            .board(seat)
            .hand()
            .iter()
            .find(|c| state.resources(seat).memory.can_afford(c.memory_cost()))
            .map(|c| c.id);
        let free_slot = (0..pattern_duel::FIELD_SLOTS)
            .find(|&i| state.board(seat).slot(i).is_none());
        if let (Some(card), Some(to_slot)) = (affordable, free_slot) {
            engine.execute_action(Action::PlayCard { seat, card, to_slot });
        }

        // Attack with every ready card while targets exist.
        let snapshot = engine.game_state();
        let ready: Vec<_> = snapshot
            .board(seat)
            .field()
            .iter()
            .flatten()
            .filter(|c| !c.exhausted)
            .map(|c| c.id)
            .collect();
        for attacker in ready {
            let Some(target) = engine
                .game_state()
                .board(seat.opponent())
                .field()
                .iter()
                .flatten()
                .map(|c| c.id)
                .next()
            else {
                break;
            };
            engine.execute_action(Action::Attack {
                seat,
                attacker,
                target,
            });
        }

        engine.execute_action(Action::EndTurn { seat });

        let state = engine.game_state();
        for seat in Seat::both() {
            assert_eq!(state.board(seat).card_count(), 10, "card conservation");
            assert!(state.board(seat).occupied_slots() <= pattern_duel::FIELD_SLOTS);
            let resources = state.resources(seat);
            assert!(resources.memory.current <= resources.memory.max);
            assert!(resources.computation.current <= resources.computation.max);
        }
    }

    let report = engine.battle_result().unwrap();
    assert_eq!(report.win_condition, WinCondition::DeckOut);
    assert!(report.turns_played > 2);
    assert!(report.rewards[report.winner].experience >= report.turns_played * 100);
}

/// Same seed, same scripted actions, same outcome.
#[test]
fn test_deterministic_replay() {
    let run = |seed: u64| {
        let mut engine = BattleEngine::new(
            MatchConfig::default(),
            &deck(0, 6, 20),
            &deck(100, 6, 20),
            seed,
        );
        for _ in 0..6 {
            let state = engine.game_state();
            let seat = state.current_turn;
            if let Some(card) = state.board(seat).hand().first().map(|c| c.id) {
                engine.execute_action(Action::PlayCard {
                    seat,
                    card,
                    to_slot: state.board(seat).occupied_slots(),
                });
            }
            engine.execute_action(Action::EndTurn { seat });
        }
        serde_json::to_string(&engine.game_state()).unwrap()
    };

    assert_eq!(run(9), run(9));
    assert_ne!(run(9), run(10));
}
