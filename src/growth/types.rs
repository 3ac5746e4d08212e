use crate::character::attributes::AttributeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One half of a skill: a change to a single attribute.
///
/// `percent_bp` is in hundredths of a percent, so 250 means 2.50%. When both
/// fields are set only the percentage applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillEffect {
    pub attribute: AttributeType,
    #[serde(default)]
    pub amount: Option<u32>,
    #[serde(default)]
    pub percent_bp: Option<u32>,
}

impl SkillEffect {
    pub fn additive(attribute: AttributeType, amount: u32) -> Self {
        Self {
            attribute,
            amount: Some(amount),
            percent_bp: None,
        }
    }

    pub fn percent(attribute: AttributeType, percent_bp: u32) -> Self {
        Self {
            attribute,
            amount: None,
            percent_bp: Some(percent_bp),
        }
    }

    /// Flat delta, ignored when a percentage is also present.
    pub fn flat_amount(&self) -> Option<u32> {
        match (self.amount, self.percent_bp) {
            (Some(amount), None) => Some(amount),
            _ => None,
        }
    }

    /// Multiplicative delta as a fraction (2.50% -> 0.025). Zero percentages are skipped.
    pub fn fraction(&self) -> Option<f64> {
        self.percent_bp
            .filter(|bp| *bp > 0)
            .map(|bp| bp as f64 / 10_000.0)
    }

    fn describe(&self, sign: char) -> String {
        match (self.flat_amount(), self.percent_bp) {
            (Some(amount), _) => format!("{}{} {}", sign, amount, self.attribute),
            (None, Some(bp)) => format!(
                "{}{}.{:02}% {}",
                sign,
                bp / 100,
                bp % 100,
                self.attribute
            ),
            (None, None) => format!("{}0 {}", sign, self.attribute),
        }
    }
}

/// A growth choice offered after a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub buff: Option<SkillEffect>,
    #[serde(default)]
    pub debuff: Option<SkillEffect>,
}

impl Skill {
    pub fn buff(effect: SkillEffect) -> Self {
        Self {
            buff: Some(effect),
            debuff: None,
        }
    }

    pub fn with_debuff(self, effect: SkillEffect) -> Self {
        Self {
            debuff: Some(effect),
            ..self
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.buff, &self.debuff) {
            (Some(buff), Some(debuff)) => {
                write!(f, "{} / {}", buff.describe('+'), debuff.describe('-'))
            }
            (Some(buff), None) => f.write_str(&buff.describe('+')),
            (None, Some(debuff)) => f.write_str(&debuff.describe('-')),
            (None, None) => f.write_str("(no effect)"),
        }
    }
}
