//! Fighters, their attributes, and JSON snapshots.

pub mod attributes;
pub mod fighter;
pub mod save;

pub use attributes::*;
pub use fighter::*;
pub use save::*;
