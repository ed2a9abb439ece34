//! Core data models for the fight tracker.

mod outcome;
mod record;
mod roster;
mod stats;

pub use outcome::*;
pub use record::*;
pub use roster::*;
pub use stats::*;
