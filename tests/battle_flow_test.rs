//! End-to-end encounter tests through the public library API.
//!
//! Covers automatic and interactive scheduling, terminal conditions, and the
//! run-state bookkeeping that follows a battle.

use gladiator::character::save::{load_game, save_game};
use gladiator::combat::scheduler::{ActionRequest, BattleEvent, Encounter, TurnOptions};
use gladiator::core::config::EngineConfig;
use gladiator::{DamageType, Fighter, GameState, Outcome, Side, StatVector};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn fighter(name: &str, stats: StatVector, rng: &mut ChaCha8Rng) -> Fighter {
    Fighter::new(name.to_string(), stats, &EngineConfig::default(), rng)
}

fn count_finished(events: &[BattleEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, BattleEvent::Finished { .. }))
        .count()
}

#[test]
fn test_last_hit_ends_battle_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let player = fighter("Hero", StatVector::uniform(10), &mut rng);
    let mut enemy = fighter("Foe", StatVector::uniform(10), &mut rng);
    enemy.hp = 1;

    let mut enc = Encounter::new(player, enemy, EngineConfig::default().encounter());
    // Never evades, never crits
    let mut never = StepRng::new(u64::MAX, 0);
    let mut finished = 0;
    let mut attacks = 0;
    for _ in 0..50 {
        let report = enc.advance(&TurnOptions::default(), &mut never);
        finished += count_finished(&report.events);
        attacks += report.entries().count();
    }

    assert_eq!(finished, 1);
    // The enemy never got to swing back in the same tick
    assert_eq!(attacks, 1);
    assert_eq!(enc.outcome(), Outcome::PlayerWon);
    assert_eq!(enc.enemy().fighter.hp, 0);
    assert_eq!(enc.player().fighter.hp, enc.player().fighter.max_hp);
}

#[test]
fn test_interactive_battle_runs_to_completion() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let player = fighter("Hero", StatVector::new(15, 10, 10, 10, 10, 5), &mut rng);
    let enemy = fighter("Foe", StatVector::uniform(8), &mut rng);
    let mut enc = Encounter::new(
        player,
        enemy,
        EngineConfig::default().encounter().interactive(),
    );

    let options = TurnOptions::default();
    let mut finished = 0;
    let mut requests = 0;
    for _ in 0..10_000 {
        if enc.is_finished() {
            break;
        }
        let report = enc.advance(&options, &mut rng);
        finished += count_finished(&report.events);
        let Some(request) = report.action_request() else {
            continue;
        };
        requests += 1;
        let choice = match request {
            ActionRequest::ChooseAttack => DamageType::Physical,
            ActionRequest::ChooseDefense { incoming } => incoming,
        };
        let answer = enc.submit_choice(choice, &mut rng).unwrap();
        let entry = answer.entries().next().cloned().unwrap();
        if let ActionRequest::ChooseDefense { incoming } = request {
            assert_eq!(entry.attacker, Side::Enemy);
            assert_eq!(entry.defense_type, Some(incoming));
        }
        finished += count_finished(&answer.events);
    }

    assert!(enc.is_finished());
    assert!(requests > 0);
    assert_eq!(finished, 1);
}

#[test]
fn test_stronger_fighter_wins_automatic_battle() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let player = fighter("Hero", StatVector::uniform(40), &mut rng);
    let enemy = fighter("Foe", StatVector::uniform(5), &mut rng);
    let mut enc = Encounter::new(player, enemy, EngineConfig::default().encounter());
    let outcome = enc.run_to_completion(&TurnOptions::default(), &mut rng, 100_000);
    assert_eq!(outcome, Outcome::PlayerWon);
    assert!(enc.log().len() <= 50);
}

#[test]
fn test_run_state_after_victory() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut state = GameState::default();
    state.create_character("Hero", StatVector::uniform(60), &mut rng);

    let mut enc = state.start_encounter(&mut rng).unwrap();
    assert_eq!(enc.enemy().fighter.stats.total(), 20);
    let outcome = enc.run_to_completion(&TurnOptions::default(), &mut rng, 100_000);
    assert_eq!(outcome, Outcome::PlayerWon);

    let settlement = state.settle_encounter(&enc, &mut rng).unwrap();
    assert!(settlement.won);
    let hero = state.character().unwrap();
    assert_eq!(hero.win_streak, 1);
    assert_eq!(hero.status_points, 5);
    // 100 + 10 + 60 * 2
    assert_eq!(settlement.reward, 230);
    assert_eq!(state.money, 330);
    assert!((3..=5).contains(&state.skill_choices.len()));

    state.choose_skill(0).unwrap();
    assert_eq!(state.character().unwrap().skills.len(), 1);
}

#[test]
fn test_archived_character_returns_as_rival() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut state = GameState::default();
    state.create_character("Old Hero", StatVector::uniform(9), &mut rng);
    state.character.as_mut().unwrap().hp = 0;
    state.start_new_run();
    state.create_character("New Hero", StatVector::uniform(5), &mut rng);

    let enc = state.start_encounter(&mut rng).unwrap();
    let rival = &enc.enemy().fighter;
    assert_eq!(rival.name, "Old Hero (Rival)");
    assert_eq!(rival.hp, rival.max_hp);
    assert_eq!(rival.id, state.history[0].id);
}

#[test]
fn test_save_mid_run_round_trips() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut state = GameState::default();
    state.create_character("Hero", StatVector::uniform(30), &mut rng);
    let mut enc = state.start_encounter(&mut rng).unwrap();
    enc.run_to_completion(&TurnOptions::default(), &mut rng, 100_000);
    state.settle_encounter(&enc, &mut rng).unwrap();

    let json = save_game(&state).unwrap();
    let loaded = load_game(&json, EngineConfig::default()).unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn test_player_at_one_hp_loses_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut player = fighter("Hero", StatVector::uniform(10), &mut rng);
    player.hp = 1;
    let enemy = fighter("Foe", StatVector::uniform(10).with(gladiator::AttributeType::Agility, 30), &mut rng);

    let mut enc = Encounter::new(player, enemy, EngineConfig::default().encounter());
    let mut never = StepRng::new(u64::MAX, 0);
    let mut finished = 0;
    for _ in 0..50 {
        let report = enc.advance(&TurnOptions::default(), &mut never);
        finished += count_finished(&report.events);
    }

    assert_eq!(finished, 1);
    assert_eq!(enc.outcome(), Outcome::PlayerLost);
    assert_eq!(enc.player().fighter.hp, 0);
}
