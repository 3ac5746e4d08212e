//! Engine tunables.
//!
//! `EngineConfig` groups every knob the formulas read so a collaborator can
//! rebalance without recompiling. `EncounterConfig` is derived from it once per
//! encounter and never changes while that encounter runs.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Balance settings shared by every encounter of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound for any attribute.
    pub max_status: u32,

    /// Max HP before vitality is added.
    pub base_hp: u32,

    /// Max HP granted per point of vitality.
    pub hp_per_vit: u32,

    /// Cooldown a fighter must reach before acting.
    pub max_cooldown: u32,

    /// Battle log entries retained, newest first.
    pub log_capacity: usize,

    /// Stat budget of a generated opponent at zero win streak.
    pub base_enemy_budget: u32,

    /// Defeated characters kept for rival rematches.
    pub history_limit: usize,

    /// Status points granted for each win.
    pub status_points_per_win: u32,

    /// Money a new save starts with.
    pub starting_money: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_status: MAX_STATUS,
            base_hp: BASE_HP,
            hp_per_vit: HP_PER_VIT,
            max_cooldown: MAX_COOLDOWN,
            log_capacity: BATTLE_LOG_CAPACITY,
            base_enemy_budget: BASE_ENEMY_BUDGET,
            history_limit: HISTORY_LIMIT,
            status_points_per_win: STATUS_POINTS_PER_WIN,
            starting_money: STARTING_MONEY,
        }
    }
}

impl EngineConfig {
    /// Parses overrides from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Faster battles for tests and quick simulations.
    pub fn quick_battles() -> Self {
        Self {
            max_cooldown: 40,
            ..Default::default()
        }
    }

    /// Snapshot of the values one encounter needs.
    pub fn encounter(&self) -> EncounterConfig {
        EncounterConfig {
            max_cooldown: self.max_cooldown.max(1),
            log_capacity: self.log_capacity,
            interactive: false,
        }
    }

    /// Max HP for a freshly built fighter with the given vitality.
    pub fn max_hp_for(&self, vitality: u32) -> u32 {
        self.base_hp
            .saturating_add(vitality.saturating_mul(self.hp_per_vit))
            .max(1)
    }
}

/// Immutable settings for a single encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterConfig {
    pub max_cooldown: u32,
    pub log_capacity: usize,
    /// Suspend for a caller decision whenever a fighter becomes ready.
    pub interactive: bool,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        EngineConfig::default().encounter()
    }
}

impl EncounterConfig {
    pub fn interactive(self) -> Self {
        Self {
            interactive: true,
            ..self
        }
    }
}
