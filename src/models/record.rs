//! A single logged match.

use serde::{Deserialize, Serialize};

use super::Outcome;

/// One entry in the result log: how the match went and who it was against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub outcome: Outcome,

    /// Opponent name, stored verbatim
    pub opponent: String,
}

impl MatchRecord {
    pub fn new(outcome: Outcome, opponent: impl Into<String>) -> Self {
        Self {
            outcome,
            opponent: opponent.into(),
        }
    }

    pub fn win(opponent: impl Into<String>) -> Self {
        Self::new(Outcome::Win, opponent)
    }

    pub fn loss(opponent: impl Into<String>) -> Self {
        Self::new(Outcome::Loss, opponent)
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }
}
