//! Headless batch simulation for balance analysis.
//!
//! Each run creates a baseline fighter and plays auto-resolved encounters
//! through [`GameState`](crate::core::game_state::GameState) until the
//! fighter falls, so the numbers come from the same code a real run uses.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
