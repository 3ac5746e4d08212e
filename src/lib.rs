//! Gladiator - turn-based arena combat engine
//!
//! Stat-driven fights between a persistent player character and a stream of
//! opponents: cooldown scheduling, physical/magic/mix damage, randomized
//! growth, and the economy that ties runs together.

pub mod character;
pub mod combat;
pub mod core;
pub mod economy;
pub mod encounter;
pub mod growth;
pub mod simulator;

pub use crate::character::attributes::{AttributeType, StatVector};
pub use crate::character::fighter::{AllocationDirection, Fighter};
pub use crate::combat::scheduler::{BattleEvent, Encounter, TurnOptions, TurnReport};
pub use crate::combat::types::{BattleFighter, BattleLogEntry, DamageType, Outcome, Side};
pub use crate::core::config::{EncounterConfig, EngineConfig};
pub use crate::core::error::{AllocationError, BattleError, GameError, SaveError};
pub use crate::core::game_state::GameState;
pub use crate::growth::types::{Skill, SkillEffect};
