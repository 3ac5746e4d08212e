use super::attributes::{AttributeType, StatVector};
use crate::core::config::EngineConfig;
use crate::core::constants::MIN_ALLOCATED_STATUS;
use crate::core::error::AllocationError;
use crate::growth::logic::recompute_stats;
use crate::growth::types::Skill;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationDirection {
    Increase,
    Decrease,
}

/// A player character or opponent, as persisted between encounters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: Uuid,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    /// Stats before skills; what status points are spent on.
    pub base_stats: StatVector,
    /// Effective stats, rebuilt from `base_stats` and `skills`.
    pub stats: StatVector,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub status_points: u32,
    #[serde(default)]
    pub win_streak: u32,
    #[serde(default)]
    pub last_reward: u64,
}

impl Fighter {
    /// Creates a fighter at full health with no skills and a zero win streak.
    pub fn new(name: String, stats: StatVector, config: &EngineConfig, rng: &mut impl Rng) -> Self {
        let max_hp = config.max_hp_for(stats.vitality());
        Self {
            id: new_fighter_id(rng),
            name,
            hp: max_hp,
            max_hp,
            base_stats: stats,
            stats,
            skills: Vec::new(),
            status_points: 0,
            win_streak: 0,
            last_reward: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn reset_hp(&mut self) {
        self.hp = self.max_hp;
    }

    /// Shifts max HP and current HP by the same signed amount, keeping `0 <= hp <= max_hp`.
    pub fn shift_max_hp(&mut self, delta: i64) {
        let max_hp = (self.max_hp as i64 + delta).max(1);
        let hp = (self.hp as i64 + delta).clamp(0, max_hp);
        self.max_hp = max_hp as u32;
        self.hp = hp as u32;
    }

}

/// Ids come from the injected RNG so seeded runs are reproducible.
pub fn new_fighter_id(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

pub fn can_increase(fighter: &Fighter, attr: AttributeType, config: &EngineConfig) -> bool {
    fighter.status_points > 0 && fighter.base_stats.get(attr) < config.max_status
}

pub fn can_decrease(fighter: &Fighter, attr: AttributeType) -> bool {
    fighter.base_stats.get(attr) > MIN_ALLOCATED_STATUS
}

/// Spends or refunds one status point on a base attribute.
///
/// Effective stats are recomputed afterwards. A vitality point moves max HP
/// and current HP by exactly `hp_per_vit`, whatever percent skills or the
/// effective cap do to effective vitality.
pub fn allocate_status_point(
    fighter: &mut Fighter,
    attr: AttributeType,
    direction: AllocationDirection,
    config: &EngineConfig,
) -> Result<(), AllocationError> {
    let hp_before = (fighter.max_hp, fighter.hp);
    let hp_delta = match direction {
        AllocationDirection::Increase => {
            if fighter.status_points == 0 {
                return Err(AllocationError::NoStatusPoints);
            }
            if !can_increase(fighter, attr, config) {
                return Err(AllocationError::AtCeiling(attr, config.max_status));
            }
            fighter.base_stats.increment(attr);
            fighter.status_points -= 1;
            config.hp_per_vit as i64
        }
        AllocationDirection::Decrease => {
            if !can_decrease(fighter, attr) {
                return Err(AllocationError::AtFloor(attr));
            }
            fighter.base_stats.decrement(attr);
            fighter.status_points += 1;
            -(config.hp_per_vit as i64)
        }
    };
    recompute_stats(fighter, config);
    if attr == AttributeType::Vitality {
        (fighter.max_hp, fighter.hp) = hp_before;
        fighter.shift_max_hp(hp_delta);
    }
    Ok(())
}
