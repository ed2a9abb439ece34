//! # Fight Tracker
//!
//! A local match tracker for fighting games: log each match as a win or
//! loss against an opponent, then see who you beat and lose to most often.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (outcomes, records, roster, summaries)
//! - **storage**: The line-oriented result log on disk
//! - **calculate**: Opponent frequency statistics
//! - **session**: Presentation state machine and terminal front end
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod session;
pub mod storage;

pub use models::*;
