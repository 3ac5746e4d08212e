//! Simulation loop built on `GameState` and `Encounter`.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::attributes::AttributeType;
use crate::character::fighter::AllocationDirection;
use crate::combat::scheduler::{BattleEvent, Encounter, TurnOptions};
use crate::core::game_state::GameState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Runs every seed in `config` and aggregates the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let runs: Vec<RunStats> = (0..config.runs)
        .map(|run_idx| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(run_idx as u64));
            let stats = simulate_single_run(config, &mut rng);
            debug!(
                run = run_idx + 1,
                wins = stats.wins,
                win_streak = stats.final_win_streak,
                "run finished"
            );
            stats
        })
        .collect();

    let report = SimReport::from_runs(runs);
    info!(
        runs = report.runs,
        avg_win_streak = report.avg_win_streak,
        win_rate = report.win_rate,
        "simulation complete"
    );
    report
}

/// One character's life: fight until defeated or out of encounters.
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut state = GameState::new(config.engine.clone());
    state.create_character("Simulant", config.starting_stats, rng);
    let mut stats = RunStats::default();

    for _ in 0..config.max_encounters {
        let Ok(mut encounter) = state.start_encounter(rng) else {
            break;
        };
        stats.battles += 1;

        if !fight(&mut encounter, config.max_ticks_per_battle, &mut stats, rng) {
            stats.battles_timed_out += 1;
            break;
        }

        let Ok(settlement) = state.settle_encounter(&encounter, rng) else {
            break;
        };
        if !settlement.won {
            break;
        }
        stats.wins += 1;
        stats.money_earned += settlement.reward;

        spend_status_points(&mut state, rng);
        if !state.skill_choices.is_empty() && state.choose_skill(0).is_ok() {
            stats.skills_taken += 1;
        }
        if config.buy_heals {
            buy_full_heal(&mut state);
        }
    }

    if let Some(character) = state.character.as_ref() {
        stats.final_win_streak = character.win_streak;
        stats.final_stats = character.stats;
    }
    stats
}

/// Ticks until the encounter resolves. Returns `false` on timeout.
fn fight(
    encounter: &mut Encounter,
    max_ticks: u64,
    stats: &mut RunStats,
    rng: &mut impl Rng,
) -> bool {
    let options = TurnOptions::default();
    for _ in 0..max_ticks {
        let report = encounter.advance(&options, rng);
        for event in &report.events {
            if let BattleEvent::Attack(entry) = event {
                stats.attacks += 1;
                if entry.evaded {
                    stats.evasions += 1;
                } else if entry.critical {
                    stats.crits += 1;
                }
            }
        }
        if report.outcome.is_finished() {
            return true;
        }
    }
    false
}

/// Spends every unspent point on a random attribute.
fn spend_status_points(state: &mut GameState, rng: &mut impl Rng) {
    let all = AttributeType::all();
    let mut attempts = 0;
    while state
        .character
        .as_ref()
        .is_some_and(|c| c.status_points > 0)
        && attempts < 1000
    {
        let attr = all[rng.gen_range(0..all.len())];
        let _ = state.allocate(attr, AllocationDirection::Increase);
        attempts += 1;
    }
}

fn buy_full_heal(state: &mut GameState) {
    let needs_heal = state
        .character
        .as_ref()
        .is_some_and(|c| c.is_alive() && c.hp < c.max_hp);
    if !needs_heal {
        return;
    }
    if let Ok(cost) = state.heal_cost(100) {
        if cost <= state.money {
            let _ = state.buy_heal(100);
        }
    }
}
