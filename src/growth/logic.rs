//! Skill generation and stat replay.
//!
//! Effective stats are never accumulated in place. They are rebuilt by
//! folding the full skill list over the fighter's base stats, which keeps
//! `recompute_stats` idempotent.

use super::types::{Skill, SkillEffect};
use crate::character::attributes::{luck_ratio, AttributeType, StatVector};
use crate::character::fighter::Fighter;
use crate::core::config::EngineConfig;
use crate::core::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Returns `max` with probability `luck_ratio`, otherwise a uniform value in `[min, max]`.
pub fn roll_luck_biased(min: u32, max: u32, luck: u32, max_status: u32, rng: &mut impl Rng) -> u32 {
    if rng.gen::<f64>() < luck_ratio(luck, max_status) {
        return max;
    }
    rng.gen_range(min..=max)
}

/// Number of choices offered: 3 at zero luck, 5 at the stat ceiling.
pub fn skill_choice_count(luck: u32, max_status: u32) -> usize {
    let span = (MAX_SKILL_CHOICES - MIN_SKILL_CHOICES + 1) as f64;
    let extra = (luck_ratio(luck, max_status) * span).floor() as usize;
    (MIN_SKILL_CHOICES + extra).clamp(MIN_SKILL_CHOICES, MAX_SKILL_CHOICES)
}

fn random_attribute(rng: &mut impl Rng) -> AttributeType {
    let all = AttributeType::all();
    all[rng.gen_range(0..all.len())]
}

fn random_effect(luck: u32, max_status: u32, rng: &mut impl Rng) -> SkillEffect {
    let attribute = random_attribute(rng);
    if rng.gen_bool(SKILL_ADDITIVE_CHANCE) {
        let amount = roll_luck_biased(SKILL_MIN_AMOUNT, SKILL_MAX_AMOUNT, luck, max_status, rng);
        SkillEffect::additive(attribute, amount)
    } else {
        let bp = roll_luck_biased(
            SKILL_MIN_PERCENT_BP,
            SKILL_MAX_PERCENT_BP,
            luck,
            max_status,
            rng,
        );
        SkillEffect::percent(attribute, bp)
    }
}

/// Rolls the growth choices offered after a win.
///
/// Five candidates are built, shuffled, and cut down to
/// [`skill_choice_count`]; luck biases every amount toward its maximum.
pub fn generate_skill_choices(luck: u32, config: &EngineConfig, rng: &mut impl Rng) -> Vec<Skill> {
    let max_status = config.max_status;
    let mut choices: Vec<Skill> = (0..SKILL_CANDIDATES)
        .map(|_| {
            let skill = Skill::buff(random_effect(luck, max_status, rng));
            if rng.gen_bool(SKILL_DEBUFF_CHANCE) {
                skill.with_debuff(random_effect(luck, max_status, rng))
            } else {
                skill
            }
        })
        .collect();

    choices.shuffle(rng);
    choices.truncate(skill_choice_count(luck, max_status));
    choices
}

fn apply_buff(value: u32, effect: &SkillEffect) -> u32 {
    let mut value = value;
    if let Some(amount) = effect.flat_amount() {
        value = value.saturating_add(amount);
    }
    if let Some(fraction) = effect.fraction() {
        value = (value as f64 * (1.0 + fraction)).floor() as u32;
    }
    value
}

fn apply_debuff(value: u32, effect: &SkillEffect) -> u32 {
    let mut value = value;
    if let Some(amount) = effect.flat_amount() {
        value = value.saturating_sub(amount);
    }
    if let Some(fraction) = effect.fraction() {
        value = (value as f64 * (1.0 - fraction)).max(0.0).floor() as u32;
    }
    value
}

/// Folds `skills` over `base` in acquisition order.
///
/// Per skill the buff applies before the debuff; per effect the flat amount
/// applies before the percentage. Results stay within `[0, max_status]`.
pub fn effective_stats(base: &StatVector, skills: &[Skill], max_status: u32) -> StatVector {
    let mut stats = *base;
    for attr in AttributeType::all() {
        let mut value = base.get(attr);
        for skill in skills {
            if let Some(buff) = skill.buff.filter(|e| e.attribute == attr) {
                value = apply_buff(value, &buff);
            }
            if let Some(debuff) = skill.debuff.filter(|e| e.attribute == attr) {
                value = apply_debuff(value, &debuff);
            }
        }
        stats.set(attr, value.min(max_status));
    }
    stats
}

/// Rebuilds `fighter.stats` from base stats and skills.
///
/// A change in effective vitality moves max HP and current HP together by
/// `hp_per_vit` per point.
pub fn recompute_stats(fighter: &mut Fighter, config: &EngineConfig) {
    let previous_vit = fighter.stats.vitality() as i64;
    let stats = effective_stats(&fighter.base_stats, &fighter.skills, config.max_status);
    let vit_delta = stats.vitality() as i64 - previous_vit;
    fighter.stats = stats;
    if vit_delta != 0 {
        fighter.shift_max_hp(vit_delta * config.hp_per_vit as i64);
    }
}

/// Records a chosen skill and refreshes the fighter's stats.
pub fn apply_skill(fighter: &mut Fighter, skill: Skill, config: &EngineConfig) {
    debug!(fighter = %fighter.name, skill = %skill, "skill acquired");
    fighter.skills.push(skill);
    recompute_stats(fighter, config);
}
