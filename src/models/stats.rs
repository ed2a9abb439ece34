//! Derived statistics models.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a category has no records.
pub const NO_CURRENT_DATA: &str = "No Current Data";

/// Opponent occurrence counts, kept in first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, u32)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `name`.
    pub fn add(&mut self, name: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((name.to_string(), 1)),
        }
    }

    pub fn get(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_count(&self) -> Option<u32> {
        self.entries.iter().map(|(_, c)| *c).max()
    }

    /// Every name sharing the highest count, in first-encountered order.
    pub fn leaders(&self) -> Vec<&str> {
        let Some(max) = self.max_count() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|(_, c)| *c == max)
            .map(|(n, _)| n.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for name in iter {
            tally.add(name);
        }
        tally
    }
}

/// Result of analyzing the log. Losses come first, matching the
/// `(most_losses, most_wins)` order the analyzer returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Opponent(s) the player lost to most often
    pub most_losses: String,

    /// Opponent(s) the player beat most often
    pub most_wins: String,
}

impl ResultSummary {
    pub fn new(most_losses: impl Into<String>, most_wins: impl Into<String>) -> Self {
        Self {
            most_losses: most_losses.into(),
            most_wins: most_wins.into(),
        }
    }

    /// Summary for an empty log.
    pub fn empty() -> Self {
        Self::new(NO_CURRENT_DATA, NO_CURRENT_DATA)
    }

    pub fn into_tuple(self) -> (String, String) {
        (self.most_losses, self.most_wins)
    }
}

impl Default for ResultSummary {
    fn default() -> Self {
        Self::empty()
    }
}
