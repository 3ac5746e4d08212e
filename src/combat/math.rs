//! Damage, critical and evasion formulas.
//!
//! These pure functions only read the two stat vectors and draw from the
//! injected RNG. The scheduler and the simulator both go through them.

use super::types::{DamageRoll, DamageType};
use crate::character::attributes::StatVector;
use crate::core::constants::*;
use rand::Rng;

/// Rolls a uniform value in `[0, 100)` and compares it against a percent chance.
///
/// # Arguments
/// * `chance_percent` - Chance to succeed (0-100)
/// * `rng` - Random number generator
pub fn roll_chance(chance_percent: f64, rng: &mut impl Rng) -> bool {
    let roll = rng.gen::<f64>() * 100.0;
    roll < chance_percent
}

fn to_damage(value: f64) -> u32 {
    value.ceil().clamp(1.0, u32::MAX as f64) as u32
}

fn diff(a: u32, b: u32) -> f64 {
    a as f64 - b as f64
}

/// Physical critical chance in percent, within `[0, 90]`.
pub fn physical_crit_chance(attacker: &StatVector, defender: &StatVector) -> f64 {
    let luck_edge = diff(attacker.luck(), defender.luck()) * 0.8;
    let precision_edge = diff(attacker.dexterity(), defender.agility()) * 0.2;
    (luck_edge + precision_edge).clamp(0.0, MAX_CRIT_CHANCE_PERCENT)
}

/// Magic critical chance in percent, within `[0, 90]`.
pub fn magic_crit_chance(attacker: &StatVector, defender: &StatVector) -> f64 {
    let luck_edge = diff(attacker.luck(), defender.luck()) * 0.8;
    let focus_edge = diff(attacker.intellect(), defender.intellect()) * 0.2;
    (luck_edge + focus_edge).clamp(0.0, MAX_CRIT_CHANCE_PERCENT)
}

pub fn physical_crit_multiplier(attacker: &StatVector) -> f64 {
    1.1 + attacker.dexterity() as f64 * 0.1
}

pub fn magic_crit_multiplier(attacker: &StatVector) -> f64 {
    1.5 + attacker.intellect() as f64 * 0.05
}

fn physical_value(attacker: &StatVector, defender: &StatVector, critical: bool) -> u32 {
    let dexterity = attacker.dexterity() as f64;
    let mut base = attacker.power() as f64 * 2.0
        + dexterity
        + (attacker.intellect() as f64 * 0.2).floor();
    if critical {
        base *= physical_crit_multiplier(attacker);
    }
    base -= (defender.vitality() as f64 * 0.7).floor() + (defender.power() as f64 * 0.3).floor();
    to_damage(base.max(1.0 + dexterity * 0.1))
}

fn magic_value(attacker: &StatVector, defender: &StatVector, critical: bool) -> u32 {
    let mut base = attacker.intellect() as f64 * 2.0 + (attacker.power() as f64 * 0.2).floor();
    if critical {
        base *= magic_crit_multiplier(attacker);
    }
    base -= (defender.intellect() as f64 * 0.7).floor();
    to_damage(base.max(1.0))
}

/// Physical hit: power and dexterity against the defender's vitality and power.
///
/// The result never drops below `1 + dexterity * 0.1`, rounded up.
pub fn physical_damage(
    attacker: &StatVector,
    defender: &StatVector,
    rng: &mut impl Rng,
) -> DamageRoll {
    let is_critical = roll_chance(physical_crit_chance(attacker, defender), rng);
    DamageRoll {
        kind: DamageType::Physical,
        value: physical_value(attacker, defender, is_critical),
        is_critical,
    }
}

/// Magic hit: intellect against the defender's intellect. Minimum 1.
pub fn magic_damage(attacker: &StatVector, defender: &StatVector, rng: &mut impl Rng) -> DamageRoll {
    let is_critical = roll_chance(magic_crit_chance(attacker, defender), rng);
    DamageRoll {
        kind: DamageType::Magic,
        value: magic_value(attacker, defender, is_critical),
        is_critical,
    }
}

fn mix(physical: DamageRoll, magic: DamageRoll) -> DamageRoll {
    DamageRoll {
        kind: DamageType::Mix,
        value: physical.value.saturating_add(magic.value),
        is_critical: physical.is_critical || magic.is_critical,
    }
}

/// Picks the damage type for an automatic attack.
///
/// Mix needs magic to match or beat physical, intellect of at least 50, and
/// at least 1.2x the defender's intellect. Otherwise the larger roll wins and
/// ties go to physical.
pub fn classify_damage(
    physical: &DamageRoll,
    magic: &DamageRoll,
    attacker: &StatVector,
    defender: &StatVector,
) -> DamageType {
    let intellect = attacker.intellect();
    let mix_unlocked = magic.value >= physical.value
        && intellect as f64 >= defender.intellect() as f64 * MIX_INTELLECT_ADVANTAGE
        && intellect >= MIX_MIN_INTELLECT;

    if mix_unlocked {
        DamageType::Mix
    } else if magic.value > physical.value {
        DamageType::Magic
    } else {
        DamageType::Physical
    }
}

/// Rolls both damage types and keeps the one [`classify_damage`] selects.
pub fn combined_damage(
    attacker: &StatVector,
    defender: &StatVector,
    rng: &mut impl Rng,
) -> DamageRoll {
    let physical = physical_damage(attacker, defender, rng);
    let magic = magic_damage(attacker, defender, rng);
    match classify_damage(&physical, &magic, attacker, defender) {
        DamageType::Physical => physical,
        DamageType::Magic => magic,
        DamageType::Mix => mix(physical, magic),
    }
}

/// Damage type the computer declares before rolling: what automatic
/// selection would pick if neither roll were critical.
pub fn preferred_damage_type(attacker: &StatVector, defender: &StatVector) -> DamageType {
    let physical = DamageRoll {
        kind: DamageType::Physical,
        value: physical_value(attacker, defender, false),
        is_critical: false,
    };
    let magic = DamageRoll {
        kind: DamageType::Magic,
        value: magic_value(attacker, defender, false),
        is_critical: false,
    };
    classify_damage(&physical, &magic, attacker, defender)
}

/// Rolls a specific damage type, bypassing automatic selection.
pub fn damage_of_type(
    kind: DamageType,
    attacker: &StatVector,
    defender: &StatVector,
    rng: &mut impl Rng,
) -> DamageRoll {
    match kind {
        DamageType::Physical => physical_damage(attacker, defender, rng),
        DamageType::Magic => magic_damage(attacker, defender, rng),
        DamageType::Mix => {
            let physical = physical_damage(attacker, defender, rng);
            let magic = magic_damage(attacker, defender, rng);
            mix(physical, magic)
        }
    }
}

/// Chance in percent that `defender` dodges `attacker`, within `[0, 99]`.
pub fn evasion_chance(defender: &StatVector, attacker: &StatVector) -> f64 {
    let footwork = diff(defender.agility(), attacker.dexterity()) * 0.3;
    let fortune = diff(defender.luck(), attacker.luck()) * 0.7;
    (BASE_EVASION_CHANCE_PERCENT + footwork + fortune).clamp(0.0, MAX_EVASION_CHANCE_PERCENT)
}

pub fn try_evade(defender: &StatVector, attacker: &StatVector, rng: &mut impl Rng) -> bool {
    roll_chance(evasion_chance(defender, attacker), rng)
}

/// Applies the declared-defense rule.
///
/// A matching declaration halves the damage; mix against mix quarters it.
/// Mismatches pass through. Never below 1.
pub fn apply_guard(damage: u32, attack: DamageType, defense: DamageType) -> u32 {
    let guarded = match (attack, defense) {
        (DamageType::Mix, DamageType::Mix) => damage / 4,
        (a, d) if a == d => damage / 2,
        _ => damage,
    };
    guarded.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    /// Every roll lands at 0.0, so any positive chance succeeds.
    fn always_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every roll lands just under 100.0, so nothing capped below 100 succeeds.
    fn never_rng() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn bruiser() -> StatVector {
        StatVector::new(20, 0, 0, 10, 0, 0)
    }

    fn guard() -> StatVector {
        StatVector::new(5, 0, 10, 0, 0, 0)
    }

    #[test]
    fn test_physical_damage_without_crit() {
        let roll = physical_damage(&bruiser(), &guard(), &mut never_rng());
        assert_eq!(roll.value, 42);
        assert!(!roll.is_critical);
        assert_eq!(roll.kind, DamageType::Physical);
    }

    #[test]
    fn test_physical_damage_with_crit() {
        // 50 * 2.1 = 105, minus 8 defense
        let roll = physical_damage(&bruiser(), &guard(), &mut always_rng());
        assert!(roll.is_critical);
        assert_eq!(roll.value, 97);
    }

    #[test]
    fn test_physical_crit_chance_formula() {
        assert_eq!(physical_crit_chance(&bruiser(), &guard()), 2.0);
        let lucky = StatVector::new(1, 1, 1, 1, 1, 500);
        assert_eq!(physical_crit_chance(&lucky, &StatVector::default()), 90.0);
        assert_eq!(physical_crit_chance(&StatVector::default(), &lucky), 0.0);
    }

    #[test]
    fn test_physical_damage_floor_scales_with_dex() {
        let wall = StatVector::uniform(999);
        let attacker = StatVector::new(1, 1, 1, 25, 1, 1);
        // floor is 1 + 2.5 = 3.5, rounded up
        let roll = physical_damage(&attacker, &wall, &mut never_rng());
        assert_eq!(roll.value, 4);
    }

    #[test]
    fn test_magic_damage_without_crit() {
        let mage = StatVector::new(10, 1, 1, 1, 30, 1);
        let target = StatVector::new(1, 1, 1, 1, 10, 1);
        // 60 + 2 - 7
        let roll = magic_damage(&mage, &target, &mut never_rng());
        assert_eq!(roll.value, 55);
        assert!(!roll.is_critical);
    }

    #[test]
    fn test_magic_damage_with_crit() {
        let mage = StatVector::new(10, 1, 1, 1, 30, 1);
        let target = StatVector::new(1, 1, 1, 1, 10, 1);
        // 62 * (1.5 + 1.5) = 186, minus 7
        let roll = magic_damage(&mage, &target, &mut always_rng());
        assert!(roll.is_critical);
        assert_eq!(roll.value, 179);
    }

    #[test]
    fn test_magic_damage_minimum_one() {
        let roll = magic_damage(&StatVector::default(), &StatVector::uniform(999), &mut never_rng());
        assert_eq!(roll.value, 1);
    }

    #[test]
    fn test_combined_picks_mix_for_strong_intellect() {
        let mage = StatVector::new(1, 1, 1, 1, 100, 0);
        let target = StatVector::new(1, 1, 1, 1, 1, 0);
        let roll = combined_damage(&mage, &target, &mut never_rng());
        assert_eq!(roll.kind, DamageType::Mix);
        // physical 23 + magic 200
        assert_eq!(roll.value, 223);
    }

    #[test]
    fn test_combined_picks_magic_below_mix_threshold() {
        let mage = StatVector::new(1, 1, 1, 1, 49, 0);
        let target = StatVector::new(1, 1, 1, 1, 1, 0);
        let roll = combined_damage(&mage, &target, &mut never_rng());
        assert_eq!(roll.kind, DamageType::Magic);
        assert_eq!(roll.value, 98);
    }

    #[test]
    fn test_combined_picks_physical_for_bruiser() {
        let roll = combined_damage(&bruiser(), &guard(), &mut never_rng());
        assert_eq!(roll.kind, DamageType::Physical);
        assert_eq!(roll.value, 42);
    }

    #[test]
    fn test_classify_needs_intellect_advantage() {
        let attacker = StatVector::new(1, 1, 1, 1, 60, 0);
        let defender = StatVector::new(1, 1, 1, 1, 55, 0);
        let physical = DamageRoll {
            kind: DamageType::Physical,
            value: 10,
            is_critical: false,
        };
        let magic = DamageRoll {
            kind: DamageType::Magic,
            value: 30,
            is_critical: true,
        };
        assert_eq!(
            classify_damage(&physical, &magic, &attacker, &defender),
            DamageType::Magic
        );
        let weak_defender = StatVector::new(1, 1, 1, 1, 50, 0);
        assert_eq!(
            classify_damage(&physical, &magic, &attacker, &weak_defender),
            DamageType::Mix
        );
    }

    #[test]
    fn test_classify_tie_goes_to_physical() {
        let stats = StatVector::default();
        let roll = |kind| DamageRoll {
            kind,
            value: 5,
            is_critical: false,
        };
        assert_eq!(
            classify_damage(&roll(DamageType::Physical), &roll(DamageType::Magic), &stats, &stats),
            DamageType::Physical
        );
    }

    #[test]
    fn test_forced_mix_sums_both() {
        let roll = damage_of_type(DamageType::Mix, &bruiser(), &guard(), &mut never_rng());
        let physical = physical_damage(&bruiser(), &guard(), &mut never_rng());
        let magic = magic_damage(&bruiser(), &guard(), &mut never_rng());
        assert_eq!(roll.kind, DamageType::Mix);
        assert_eq!(roll.value, physical.value + magic.value);
    }

    #[test]
    fn test_evasion_chance_bounds() {
        let nimble = StatVector::new(1, 999, 1, 1, 1, 999);
        let clumsy = StatVector::new(1, 1, 1, 999, 1, 999);
        assert_eq!(evasion_chance(&nimble, &StatVector::default()), 99.0);
        assert_eq!(evasion_chance(&StatVector::default(), &clumsy), 0.0);
        assert_eq!(
            evasion_chance(&StatVector::default(), &StatVector::default()),
            1.0
        );
    }

    #[test]
    fn test_try_evade_follows_roll() {
        let stats = StatVector::default();
        assert!(try_evade(&stats, &stats, &mut always_rng()));
        assert!(!try_evade(&stats, &stats, &mut never_rng()));
    }

    #[test]
    fn test_apply_guard() {
        assert_eq!(apply_guard(40, DamageType::Physical, DamageType::Physical), 20);
        assert_eq!(apply_guard(40, DamageType::Magic, DamageType::Magic), 20);
        assert_eq!(apply_guard(40, DamageType::Mix, DamageType::Mix), 10);
        assert_eq!(apply_guard(40, DamageType::Physical, DamageType::Magic), 40);
        assert_eq!(apply_guard(1, DamageType::Mix, DamageType::Mix), 1);
    }

    #[test]
    fn test_preferred_damage_type() {
        let mage = StatVector::new(1, 1, 1, 1, 100, 0);
        assert_eq!(
            preferred_damage_type(&mage, &StatVector::default()),
            DamageType::Mix
        );
        assert_eq!(
            preferred_damage_type(&StatVector::uniform(10), &StatVector::uniform(10)),
            DamageType::Physical
        );
    }

    #[test]
    fn test_roll_chance_extremes() {
        let mut rng = always_rng();
        assert!(!roll_chance(0.0, &mut rng));
        assert!(roll_chance(0.1, &mut rng));
        let mut rng = never_rng();
        assert!(!roll_chance(99.0, &mut rng));
    }
}
