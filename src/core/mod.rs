//! Constants, configuration, errors, the collaborator facade and run state.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game_state;

pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use game_state::*;
