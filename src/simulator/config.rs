//! Simulation configuration.

use crate::character::attributes::StatVector;
use crate::core::config::EngineConfig;
use crate::core::constants::BASELINE_ATTRIBUTE_VALUE;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent runs
    pub runs: u32,

    /// Seed of the first run; run `i` uses `seed + i`
    pub seed: u64,

    /// Encounters per run before the run is cut off
    pub max_encounters: u32,

    /// Scheduler ticks per battle before it counts as timed out
    pub max_ticks_per_battle: u64,

    /// Starting attributes of every simulated character
    pub starting_stats: StatVector,

    /// Buy a full heal between fights when affordable
    pub buy_heals: bool,

    pub engine: EngineConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            seed: 42,
            max_encounters: 200,
            max_ticks_per_battle: 100_000,
            starting_stats: StatVector::uniform(BASELINE_ATTRIBUTE_VALUE),
            buy_heals: true,
            engine: EngineConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small batch with short cooldowns, for smoke tests.
    pub fn quick() -> Self {
        Self {
            runs: 10,
            max_encounters: 50,
            engine: EngineConfig::quick_battles(),
            ..Default::default()
        }
    }

    /// How far a character gets without ever healing.
    pub fn no_heal(runs: u32) -> Self {
        Self {
            runs,
            buy_heals: false,
            ..Default::default()
        }
    }
}
