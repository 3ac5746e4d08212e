//! JSON snapshots of fighters and run state.
//!
//! Where the snapshot is stored is up to the caller. Loading a run trims the
//! archived history back to the configured limit.

use super::fighter::Fighter;
use crate::core::config::EngineConfig;
use crate::core::error::SaveError;
use crate::core::game_state::GameState;

pub fn fighter_to_json(fighter: &Fighter) -> Result<String, SaveError> {
    Ok(serde_json::to_string(fighter)?)
}

pub fn fighter_from_json(json: &str) -> Result<Fighter, SaveError> {
    Ok(serde_json::from_str(json)?)
}

pub fn save_game(state: &GameState) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Restores a run and attaches `config`, which snapshots never carry.
pub fn load_game(json: &str, config: EngineConfig) -> Result<GameState, SaveError> {
    let mut state: GameState = serde_json::from_str(json)?;
    state.set_config(config);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::{AttributeType, StatVector};
    use crate::growth::{apply_skill, Skill, SkillEffect};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fighter_round_trip() {
        let config = EngineConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut fighter = Fighter::new("Hero".to_string(), StatVector::uniform(7), &config, &mut rng);
        apply_skill(
            &mut fighter,
            Skill::buff(SkillEffect::percent(AttributeType::Power, 325))
                .with_debuff(SkillEffect::additive(AttributeType::Agility, 2)),
            &config,
        );
        fighter.win_streak = 4;
        fighter.hp = 33;

        let json = fighter_to_json(&fighter).unwrap();
        assert_eq!(fighter_from_json(&json).unwrap(), fighter);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Old",
            "hp": 10,
            "max_hp": 150,
            "base_stats": {"values": [5, 5, 5, 5, 5, 5]},
            "stats": {"values": [5, 5, 5, 5, 5, 5]}
        }"#;
        let fighter = fighter_from_json(json).unwrap();
        assert!(fighter.skills.is_empty());
        assert_eq!(fighter.win_streak, 0);
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(fighter_from_json("{"), Err(SaveError::Json(_))));
    }

    #[test]
    fn test_load_trims_history() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = GameState::default();
        for i in 0..5 {
            state.create_character(format!("Hero {i}"), StatVector::uniform(5), &mut rng);
            state.start_new_run();
        }
        let json = save_game(&state).unwrap();

        let config = EngineConfig {
            history_limit: 2,
            ..EngineConfig::default()
        };
        let loaded = load_game(&json, config).unwrap();
        assert_eq!(loaded.history.len(), 2);
        assert_eq!(loaded.history[1].name, "Hero 4");
        assert_eq!(loaded.config().history_limit, 2);
    }
}
