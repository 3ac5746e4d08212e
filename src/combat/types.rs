use crate::character::fighter::Fighter;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Physical,
    Magic,
    /// Physical and magic combined; unlocked by a large intellect advantage.
    Mix,
}

impl DamageType {
    pub fn all() -> [DamageType; 3] {
        [DamageType::Physical, DamageType::Magic, DamageType::Mix]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Magic => "magic",
            DamageType::Mix => "mix",
        }
    }

    /// Uniform pick used for the computer side's declared type.
    pub fn random(rng: &mut impl Rng) -> Self {
        let all = Self::all();
        all[rng.gen_range(0..all.len())]
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one damage roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    pub kind: DamageType,
    pub value: u32,
    pub is_critical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continuing,
    PlayerWon,
    PlayerLost,
}

impl Outcome {
    pub fn is_finished(self) -> bool {
        !matches!(self, Outcome::Continuing)
    }
}

/// A fighter for the duration of one encounter. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleFighter {
    pub fighter: Fighter,
    pub cooldown: u32,
}

impl BattleFighter {
    pub fn new(fighter: Fighter) -> Self {
        Self {
            fighter,
            cooldown: 0,
        }
    }

    pub fn is_ready(&self, max_cooldown: u32) -> bool {
        self.cooldown >= max_cooldown
    }

    pub fn into_fighter(self) -> Fighter {
        self.fighter
    }
}

impl From<Fighter> for BattleFighter {
    fn from(fighter: Fighter) -> Self {
        Self::new(fighter)
    }
}

/// One line of the battle log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub attacker: Side,
    pub attacker_name: String,
    pub defender_name: String,
    pub evaded: bool,
    pub damage: u32,
    pub critical: bool,
    pub attack_type: DamageType,
    /// Declared defense, only present in interactive encounters.
    pub defense_type: Option<DamageType>,
    /// Defender HP after the hit.
    pub defender_hp: u32,
}

impl fmt::Display for BattleLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.evaded {
            return write!(
                f,
                "{} attacks ({}) but {} evades!",
                self.attacker_name, self.attack_type, self.defender_name
            );
        }
        let crit = if self.critical { " (Critical!)" } else { "" };
        match self.defense_type {
            Some(defense) if defense == self.attack_type => write!(
                f,
                "{} attacks ({}), {} defends perfectly, only {} dmg{}",
                self.attacker_name, self.attack_type, self.defender_name, self.damage, crit
            ),
            Some(defense) => write!(
                f,
                "{} attacks ({}), {} defends with ({}), deals {} dmg{}",
                self.attacker_name, self.attack_type, self.defender_name, defense, self.damage, crit
            ),
            None => write!(
                f,
                "{} attacks {} ({}) for {} dmg{} (HP left {})",
                self.attacker_name,
                self.defender_name,
                self.attack_type,
                self.damage,
                crit,
                self.defender_hp
            ),
        }
    }
}
