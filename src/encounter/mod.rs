//! Opponent selection: rival rematches and generated challengers.

pub mod generation;
pub mod selection;

pub use generation::*;
pub use selection::*;
