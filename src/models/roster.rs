//! The closed set of opponents a player can pick from.

use serde::{Deserialize, Serialize};

/// Opponents offered when no roster is configured.
pub const DEFAULT_FIGHTERS: [&str; 5] = ["Ryu", "Ken", "Chun-Li", "Guile", "Blanka"];

/// Selectable opponents, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default = "default_fighters")]
    pub fighters: Vec<String>,
}

fn default_fighters() -> Vec<String> {
    DEFAULT_FIGHTERS.iter().map(|s| s.to_string()).collect()
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            fighters: default_fighters(),
        }
    }
}

impl Roster {
    pub fn new(fighters: Vec<String>) -> Self {
        Self { fighters }
    }

    /// Find the canonical spelling of `name` (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.fighters
            .iter()
            .find(|f| f.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Look up a fighter by 1-based position in the list.
    pub fn by_number(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.fighters.get(i))
            .map(String::as_str)
    }

    /// Resolve either a name or a 1-based number.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        match input.trim().parse::<usize>() {
            Ok(n) => self.by_number(n),
            Err(_) => self.find(input),
        }
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }
}
