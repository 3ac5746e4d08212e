use crate::character::attributes::AttributeType;

/// Why a status-point allocation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("no unspent status points")]
    NoStatusPoints,
    #[error("{0} is already at the ceiling of {1}")]
    AtCeiling(AttributeType, u32),
    #[error("{0} cannot go below 1")]
    AtFloor(AttributeType),
}

/// Errors raised by an encounter in interactive mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("the encounter is not waiting for a choice")]
    NoPendingAction,
}

/// Errors surfaced by run-level actions on [`GameState`](crate::core::game_state::GameState).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no active character")]
    NoCharacter,
    #[error("character is defeated")]
    CharacterDefeated,
    #[error("the encounter has not resolved yet")]
    EncounterNotFinished,
    #[error("not enough money: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },
    #[error("skill choice {index} out of range ({available} offered)")]
    InvalidSkillChoice { index: usize, available: usize },
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

/// Errors reading or writing the persisted JSON form.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),
}
