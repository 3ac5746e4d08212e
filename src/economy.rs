//! Money earned from wins and spent on healing.

use crate::character::attributes::luck_ratio;
use crate::character::fighter::Fighter;
use crate::core::constants::*;

/// Money paid out for a win: `100 + win_streak * 10 + luck * 2`.
pub fn reward(win_streak: u32, luck: u32) -> u64 {
    BASE_REWARD + win_streak as u64 * REWARD_PER_WIN + luck as u64 * REWARD_PER_LUCK
}

pub fn reward_for(fighter: &Fighter) -> u64 {
    reward(fighter.win_streak, fighter.stats.luck())
}

/// Price of healing `percent` of max HP.
///
/// Starts at 500, a full heal gets 20% off, the result scales with `percent`
/// and luck shaves off its luck ratio. Never below 1.
pub fn heal_cost(percent: u32, luck: u32, max_status: u32) -> u64 {
    let percent = percent.min(100);
    let mut cost = BASE_HEAL_COST;
    if percent == 100 {
        cost *= 1.0 - FULL_HEAL_DISCOUNT;
    }
    cost *= percent as f64 / 100.0;
    cost -= cost * luck_ratio(luck, max_status);
    (cost.floor() as u64).max(1)
}

/// HP restored by a heal of `percent`, before clamping to max HP.
pub fn heal_amount(max_hp: u32, percent: u32) -> u32 {
    (max_hp as u64 * percent.min(100) as u64 / 100) as u32
}
