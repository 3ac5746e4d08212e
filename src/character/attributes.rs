use crate::core::constants::NUM_ATTRIBUTES;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Power,
    Agility,
    Vitality,
    Dexterity,
    Intellect,
    Luck,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Power,
            AttributeType::Agility,
            AttributeType::Vitality,
            AttributeType::Dexterity,
            AttributeType::Intellect,
            AttributeType::Luck,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            AttributeType::Power => "STR",
            AttributeType::Agility => "AGI",
            AttributeType::Vitality => "VIT",
            AttributeType::Dexterity => "DEX",
            AttributeType::Intellect => "INT",
            AttributeType::Luck => "LUK",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Power => 0,
            AttributeType::Agility => 1,
            AttributeType::Vitality => 2,
            AttributeType::Dexterity => 3,
            AttributeType::Intellect => 4,
            AttributeType::Luck => 5,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// The six-attribute stat block shared by players and opponents.
///
/// Values are unsigned, so anything a collaborator would pass as a negative
/// stat is already clamped to zero by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct StatVector {
    values: [u32; NUM_ATTRIBUTES],
}

impl Default for StatVector {
    fn default() -> Self {
        Self::uniform(1)
    }
}

impl StatVector {
    pub fn uniform(value: u32) -> Self {
        Self {
            values: [value; NUM_ATTRIBUTES],
        }
    }

    /// Builds a vector in `STR AGI VIT DEX INT LUK` order.
    pub fn new(
        power: u32,
        agility: u32,
        vitality: u32,
        dexterity: u32,
        intellect: u32,
        luck: u32,
    ) -> Self {
        Self {
            values: [power, agility, vitality, dexterity, intellect, luck],
        }
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: u32) {
        self.values[attr.index()] = value;
    }

    pub fn with(mut self, attr: AttributeType, value: u32) -> Self {
        self.set(attr, value);
        self
    }

    pub fn increment(&mut self, attr: AttributeType) {
        self.values[attr.index()] = self.values[attr.index()].saturating_add(1);
    }

    pub fn decrement(&mut self, attr: AttributeType) {
        self.values[attr.index()] = self.values[attr.index()].saturating_sub(1);
    }

    pub fn power(&self) -> u32 {
        self.get(AttributeType::Power)
    }

    pub fn agility(&self) -> u32 {
        self.get(AttributeType::Agility)
    }

    pub fn vitality(&self) -> u32 {
        self.get(AttributeType::Vitality)
    }

    pub fn dexterity(&self) -> u32 {
        self.get(AttributeType::Dexterity)
    }

    pub fn intellect(&self) -> u32 {
        self.get(AttributeType::Intellect)
    }

    pub fn luck(&self) -> u32 {
        self.get(AttributeType::Luck)
    }

    pub fn total(&self) -> u64 {
        self.values.iter().map(|v| *v as u64).sum()
    }

    /// Attribute holding the highest value; earlier attributes win ties.
    pub fn dominant(&self) -> AttributeType {
        let mut best = AttributeType::Power;
        for attr in AttributeType::all() {
            if self.get(attr) > self.get(best) {
                best = attr;
            }
        }
        best
    }

    /// Returns a copy with every attribute clamped into `[min, max]`.
    pub fn clamped(&self, min: u32, max: u32) -> Self {
        let mut out = *self;
        for value in out.values.iter_mut() {
            *value = (*value).clamp(min, max);
        }
        out
    }
}

/// Luck as a fraction of the stat ceiling, in `[0, 1]`.
pub fn luck_ratio(luck: u32, max_status: u32) -> f64 {
    if max_status == 0 {
        return 0.0;
    }
    luck.min(max_status) as f64 / max_status as f64
}

impl fmt::Display for StatVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = AttributeType::all()
            .iter()
            .map(|attr| format!("{} {}", attr.abbrev(), self.get(*attr)))
            .collect();
        f.write_str(&parts.join(" / "))
    }
}
