//! Plain-data entry points for collaborators.
//!
//! Each function takes fighters by value or reference and hands back updated
//! copies, so a UI or persistence layer never has to hold an [`Encounter`]
//! between calls.

use crate::character::attributes::AttributeType;
use crate::character::fighter::{allocate_status_point, AllocationDirection, Fighter};
use crate::combat::scheduler::{Encounter, TurnOptions};
use crate::combat::types::{BattleFighter, BattleLogEntry, Outcome};
use crate::core::config::{EncounterConfig, EngineConfig};
use crate::core::error::AllocationError;
use crate::economy;
use crate::encounter::select_opponent;
use crate::growth::{apply_skill, generate_skill_choices, Skill};
use rand::Rng;

/// Fighters and log entries after one scheduler tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResolution {
    pub player: BattleFighter,
    pub enemy: BattleFighter,
    /// Attacks resolved this tick, in the order they happened.
    pub entries: Vec<BattleLogEntry>,
    pub outcome: Outcome,
}

/// Advances one automatic tick for a pair of fighters.
///
/// Cooldowns travel with the returned [`BattleFighter`]s; pass them back in
/// on the next call. Interactive mode is not available here, use
/// [`Encounter`] directly for that.
pub fn resolve_turn(
    player: BattleFighter,
    enemy: BattleFighter,
    config: EncounterConfig,
    options: &TurnOptions,
    rng: &mut impl Rng,
) -> TurnResolution {
    let config = EncounterConfig {
        interactive: false,
        ..config
    };
    let mut encounter = Encounter::from_battle_fighters(player, enemy, config);
    let report = encounter.advance(options, rng);
    let entries = report.entries().cloned().collect();
    let (player, enemy) = encounter.into_battle_fighters();
    TurnResolution {
        player,
        enemy,
        entries,
        outcome: report.outcome,
    }
}

/// Opponent for the player's next fight: a rival from `history` or a new one.
pub fn start_encounter(
    player: &Fighter,
    history: &[Fighter],
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Fighter {
    select_opponent(player, history, config, rng)
}

pub fn generate_growth_choices(luck: u32, config: &EngineConfig, rng: &mut impl Rng) -> Vec<Skill> {
    generate_skill_choices(luck, config, rng)
}

pub fn apply_growth_choice(fighter: Fighter, skill: Skill, config: &EngineConfig) -> Fighter {
    let mut fighter = fighter;
    apply_skill(&mut fighter, skill, config);
    fighter
}

/// Spends or refunds one point on a copy of `fighter`.
pub fn allocate_point(
    fighter: &Fighter,
    attribute: AttributeType,
    direction: AllocationDirection,
    config: &EngineConfig,
) -> Result<Fighter, AllocationError> {
    let mut fighter = fighter.clone();
    allocate_status_point(&mut fighter, attribute, direction, config)?;
    Ok(fighter)
}

pub fn compute_reward(fighter: &Fighter) -> u64 {
    economy::reward_for(fighter)
}

pub fn compute_heal_cost(fighter: &Fighter, percent: u32, config: &EngineConfig) -> u64 {
    economy::heal_cost(percent, fighter.stats.luck(), config.max_status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::StatVector;
    use crate::combat::types::Side;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_fighter(name: &str, stats: StatVector) -> Fighter {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        Fighter::new(name.to_string(), stats, &EngineConfig::default(), &mut rng)
    }

    #[test]
    fn test_resolve_turn_carries_cooldown() {
        let config = EngineConfig::default().encounter();
        let mut player = BattleFighter::new(make_fighter("Hero", StatVector::uniform(10)));
        let mut enemy = BattleFighter::new(make_fighter("Foe", StatVector::uniform(10)));
        let mut rng = StepRng::new(u64::MAX, 0);

        for _ in 0..9 {
            let res = resolve_turn(player, enemy, config, &TurnOptions::default(), &mut rng);
            assert!(res.entries.is_empty());
            player = res.player;
            enemy = res.enemy;
        }
        assert_eq!(player.cooldown, 90);

        let res = resolve_turn(player, enemy, config, &TurnOptions::default(), &mut rng);
        assert_eq!(res.entries.len(), 2);
        assert_eq!(res.entries[0].attacker, Side::Player);
        assert_eq!(res.player.cooldown, 0);
        assert_eq!(res.enemy.fighter.hp, 178);
        assert_eq!(res.outcome, Outcome::Continuing);
    }

    #[test]
    fn test_resolve_turn_ignores_interactive_flag() {
        let config = EngineConfig::default().encounter().interactive();
        let player = BattleFighter {
            fighter: make_fighter("Hero", StatVector::uniform(10)),
            cooldown: 100,
        };
        let enemy = BattleFighter::new(make_fighter("Foe", StatVector::uniform(10)));
        let res = resolve_turn(
            player,
            enemy,
            config,
            &TurnOptions::default(),
            &mut StepRng::new(u64::MAX, 0),
        );
        assert_eq!(res.entries.len(), 1);
    }

    #[test]
    fn test_resolve_turn_reports_win() {
        let config = EngineConfig::default().encounter();
        let player = BattleFighter {
            fighter: make_fighter("Hero", StatVector::uniform(10)),
            cooldown: 100,
        };
        let mut foe = make_fighter("Foe", StatVector::uniform(10));
        foe.hp = 1;
        let res = resolve_turn(
            player,
            BattleFighter::new(foe),
            config,
            &TurnOptions::default(),
            &mut StepRng::new(u64::MAX, 0),
        );
        assert_eq!(res.outcome, Outcome::PlayerWon);
        assert_eq!(res.enemy.fighter.hp, 0);
    }

    #[test]
    fn test_allocate_point_returns_updated_copy() {
        let config = EngineConfig::default();
        let mut fighter = make_fighter("Hero", StatVector::uniform(5));
        fighter.status_points = 1;
        let fighter =
            allocate_point(&fighter, AttributeType::Vitality, AllocationDirection::Increase, &config)
                .unwrap();
        assert_eq!(fighter.max_hp, 160);
        assert_eq!(fighter.status_points, 0);

        let err =
            allocate_point(&fighter, AttributeType::Vitality, AllocationDirection::Increase, &config)
                .unwrap_err();
        assert_eq!(err, AllocationError::NoStatusPoints);
    }

    #[test]
    fn test_economy_facade() {
        let config = EngineConfig::default();
        let mut fighter = make_fighter("Hero", StatVector::uniform(5));
        fighter.win_streak = 2;
        assert_eq!(compute_reward(&fighter), 100 + 20 + 10);
        // 250 minus 5/999 of it
        assert_eq!(compute_heal_cost(&fighter, 50, &config), 248);
    }

    #[test]
    fn test_growth_facade() {
        let config = EngineConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let choices = generate_growth_choices(0, &config, &mut rng);
        assert_eq!(choices.len(), 3);
        let fighter = make_fighter("Hero", StatVector::uniform(5));
        let grown = apply_growth_choice(fighter, choices[0], &config);
        assert_eq!(grown.skills, vec![choices[0]]);
    }
}
