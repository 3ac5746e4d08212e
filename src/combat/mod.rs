//! Damage formulas and the cooldown scheduler.

pub mod math;
pub mod scheduler;
pub mod types;

pub use math::*;
pub use scheduler::*;
pub use types::*;
