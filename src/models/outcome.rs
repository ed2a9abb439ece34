//! Match outcome from the player's point of view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether the player won or lost the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Error returned when text cannot be read as an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown outcome: {0:?} (expected win or loss)")]
pub struct ParseOutcomeError(pub String);

impl Outcome {
    /// The exact token written to the record file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
        }
    }

    /// Parse the persisted token. Only the exact spellings are accepted.
    pub fn from_record(token: &str) -> Option<Self> {
        match token {
            "Win" => Some(Outcome::Win),
            "Loss" => Some(Outcome::Loss),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient parse for user input: `win`, `W`, `Loss`, `l`, ...
impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" | "w" => Ok(Outcome::Win),
            "loss" | "lose" | "l" => Ok(Outcome::Loss),
            _ => Err(ParseOutcomeError(s.to_string())),
        }
    }
}
