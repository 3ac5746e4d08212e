// Character attributes
pub const NUM_ATTRIBUTES: usize = 6;
pub const MAX_STATUS: u32 = 999;
pub const MIN_ALLOCATED_STATUS: u32 = 1;
pub const BASELINE_ATTRIBUTE_VALUE: u32 = 5;

// Health
pub const BASE_HP: u32 = 100;
pub const HP_PER_VIT: u32 = 10;

// Turn scheduling
pub const MAX_COOLDOWN: u32 = 100;
pub const COOLDOWN_INCREMENT_SCALE: f64 = 20.0;
pub const MIN_COOLDOWN_INCREMENT: u32 = 1;
pub const MAX_COOLDOWN_INCREMENT: u32 = 20;
pub const BATTLE_LOG_CAPACITY: usize = 50;

// Critical and evasion caps (percent)
pub const MAX_CRIT_CHANCE_PERCENT: f64 = 90.0;
pub const MAX_EVASION_CHANCE_PERCENT: f64 = 99.0;
pub const BASE_EVASION_CHANCE_PERCENT: f64 = 1.0;

// Mix damage unlock
pub const MIX_INTELLECT_ADVANTAGE: f64 = 1.2;
pub const MIX_MIN_INTELLECT: u32 = 50;

// Skill generation
pub const SKILL_CANDIDATES: usize = 5;
pub const MIN_SKILL_CHOICES: usize = 3;
pub const MAX_SKILL_CHOICES: usize = 5;
pub const SKILL_ADDITIVE_CHANCE: f64 = 0.8;
pub const SKILL_DEBUFF_CHANCE: f64 = 0.3;
pub const SKILL_MIN_AMOUNT: u32 = 1;
pub const SKILL_MAX_AMOUNT: u32 = 10;
/// Percentages are stored in hundredths of a percent (100 = 1.00%).
pub const SKILL_MIN_PERCENT_BP: u32 = 100;
pub const SKILL_MAX_PERCENT_BP: u32 = 500;

// Encounters
pub const BASE_ENEMY_BUDGET: u32 = 20;
pub const ENEMY_BUDGET_PER_WIN: u32 = 10;
pub const ENEMY_TITLE_THRESHOLD: u32 = 50;
pub const ENEMY_LEGENDARY_THRESHOLD: u32 = 100;
pub const RIVAL_NAME_SUFFIX: &str = " (Rival)";
pub const HISTORY_LIMIT: usize = 20;

// Economy
pub const STARTING_MONEY: u64 = 100;
pub const BASE_REWARD: u64 = 100;
pub const REWARD_PER_WIN: u64 = 10;
pub const REWARD_PER_LUCK: u64 = 2;
pub const BASE_HEAL_COST: f64 = 500.0;
pub const FULL_HEAL_DISCOUNT: f64 = 0.2;
pub const STATUS_POINTS_PER_WIN: u32 = 5;
