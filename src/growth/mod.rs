//! Character growth: skill choices and stat replay.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
