//! Procedural opponents scaled to the player's win streak.

use crate::character::attributes::{AttributeType, StatVector};
use crate::character::fighter::Fighter;
use crate::core::config::EngineConfig;
use crate::core::constants::*;
use rand::Rng;

/// Names for power-focused opponents.
pub const POWER_NAMES: [&str; 5] = ["Maximus", "Brutus", "Gaius", "Titus", "Drusus"];

/// Names for agility-focused opponents.
pub const AGILITY_NAMES: [&str; 5] = ["Aurelia", "Felix", "Nero", "Crispus", "Sabina"];

/// Names for vitality-focused opponents.
pub const VITALITY_NAMES: [&str; 5] = ["Cassia", "Marcellus", "Severus", "Flavia", "Publius"];

/// Names for dexterity-focused opponents.
pub const DEXTERITY_NAMES: [&str; 5] = ["Lucilla", "Quintus", "Vibia", "Paulus", "Agrippa"];

/// Names for intellect-focused opponents.
pub const INTELLECT_NAMES: [&str; 5] = ["Octavia", "Cornelia", "Julius", "Livia", "Antonia"];

/// Names for luck-focused opponents.
pub const LUCK_NAMES: [&str; 5] = ["Valeria", "Fabia", "Sextus", "Claudia", "Decimus"];

pub fn name_pool(attr: AttributeType) -> &'static [&'static str] {
    match attr {
        AttributeType::Power => &POWER_NAMES,
        AttributeType::Agility => &AGILITY_NAMES,
        AttributeType::Vitality => &VITALITY_NAMES,
        AttributeType::Dexterity => &DEXTERITY_NAMES,
        AttributeType::Intellect => &INTELLECT_NAMES,
        AttributeType::Luck => &LUCK_NAMES,
    }
}

/// Word used in both the plain and the legendary title.
fn title_word(attr: AttributeType) -> &'static str {
    match attr {
        AttributeType::Power => "Strength",
        AttributeType::Agility => "Agility",
        AttributeType::Vitality => "Vitality",
        AttributeType::Dexterity => "Dexterity",
        AttributeType::Intellect => "Intellect",
        AttributeType::Luck => "Fortune",
    }
}

/// Total stat points for an opponent at `win_streak`.
///
/// Linear (`10 * ws`) early, quadratic (`ws^2`) once the streak passes 10.
pub fn enemy_budget(win_streak: u32, base_budget: u32) -> u64 {
    let ws = win_streak as u64;
    base_budget as u64 + (ws * ENEMY_BUDGET_PER_WIN as u64).max(ws * ws)
}

/// Spreads `budget` over the six attributes.
///
/// Every attribute starts at 1, then the rest is dealt one point at a time
/// to a uniformly chosen attribute that is still below `max_status`.
pub fn distribute_budget(budget: u64, max_status: u32, rng: &mut impl Rng) -> StatVector {
    let mut stats = StatVector::uniform(MIN_ALLOCATED_STATUS);
    let mut remaining = budget.saturating_sub(stats.total());

    while remaining > 0 {
        let open: Vec<AttributeType> = AttributeType::all()
            .into_iter()
            .filter(|attr| stats.get(*attr) < max_status)
            .collect();
        if open.is_empty() {
            break;
        }
        let attr = open[rng.gen_range(0..open.len())];
        stats.increment(attr);
        remaining -= 1;
    }
    stats
}

/// Picks a name from the archetype's pool and appends a title for a high stat.
pub fn opponent_name(archetype: AttributeType, value: u32, rng: &mut impl Rng) -> String {
    let pool = name_pool(archetype);
    let name = pool[rng.gen_range(0..pool.len())];
    if value > ENEMY_LEGENDARY_THRESHOLD {
        format!("{} the Legendary {}", name, title_word(archetype))
    } else if value > ENEMY_TITLE_THRESHOLD {
        format!("{} the {}", name, title_word(archetype))
    } else {
        name.to_string()
    }
}

/// Builds a fresh opponent for a player on `win_streak`.
///
/// A random archetype attribute is swapped into the highest slot so the
/// opponent's name matches its build.
pub fn generate_opponent(win_streak: u32, config: &EngineConfig, rng: &mut impl Rng) -> Fighter {
    let budget = enemy_budget(win_streak, config.base_enemy_budget);
    let mut stats = distribute_budget(budget, config.max_status, rng);

    let archetype = AttributeType::all()[rng.gen_range(0..NUM_ATTRIBUTES)];
    let top = stats.dominant();
    if top != archetype {
        let high = stats.get(top);
        stats.set(top, stats.get(archetype));
        stats.set(archetype, high);
    }

    let name = opponent_name(archetype, stats.get(archetype), rng);
    Fighter::new(name, stats, config, rng)
}
