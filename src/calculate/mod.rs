//! Statistics calculation.
//!
//! Everything here is recomputed from the full record list on every call;
//! nothing is cached between calls.

use crate::models::{MatchRecord, Outcome, ResultSummary, Tally, NO_CURRENT_DATA};

/// Tally opponent names in first-encountered order.
pub fn tally<'a, I>(names: I) -> Tally
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().collect()
}

/// The most frequent name(s), joined with `", "`.
///
/// Ties are all reported, in the order they were first seen. Returns
/// [`NO_CURRENT_DATA`] when there are no names.
pub fn most_frequent<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let tally = tally(names);
    if tally.is_empty() {
        return NO_CURRENT_DATA.to_string();
    }
    tally.leaders().join(", ")
}

fn opponents_with<'a>(
    records: &'a [MatchRecord],
    outcome: Outcome,
) -> impl Iterator<Item = &'a str> + 'a {
    records
        .iter()
        .filter(move |r| r.outcome == outcome)
        .map(|r| r.opponent.as_str())
}

/// Summarize the log: who the player loses to and beats most often.
pub fn summarize(records: &[MatchRecord]) -> ResultSummary {
    if records.is_empty() {
        return ResultSummary::empty();
    }

    ResultSummary {
        most_losses: most_frequent(opponents_with(records, Outcome::Loss)),
        most_wins: most_frequent(opponents_with(records, Outcome::Win)),
    }
}

/// Analyze the log, returning `(most_losses, most_wins)` in that order.
pub fn analyze(records: &[MatchRecord]) -> (String, String) {
    summarize(records).into_tuple()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair(losses: &str, wins: &str) -> (String, String) {
        (losses.to_string(), wins.to_string())
    }

    #[test]
    fn test_analyze_empty() {
        assert_eq!(analyze(&[]), pair(NO_CURRENT_DATA, NO_CURRENT_DATA));
    }

    #[test]
    fn test_analyze_clear_winner() {
        let records = vec![
            MatchRecord::win("Ryu"),
            MatchRecord::win("Ken"),
            MatchRecord::win("Ryu"),
        ];
        assert_eq!(analyze(&records), pair(NO_CURRENT_DATA, "Ryu"));
    }

    #[test]
    fn test_analyze_tie_keeps_first_seen_order() {
        let records = vec![MatchRecord::win("Ryu"), MatchRecord::win("Ken")];
        assert_eq!(analyze(&records).1, "Ryu, Ken");

        let records = vec![MatchRecord::win("Ken"), MatchRecord::win("Ryu")];
        assert_eq!(analyze(&records).1, "Ken, Ryu");
    }

    #[test]
    fn test_analyze_losses_only() {
        let records = vec![MatchRecord::loss("Guile")];
        assert_eq!(analyze(&records), pair("Guile", NO_CURRENT_DATA));
    }

    #[test]
    fn test_analyze_returns_losses_first() {
        let records = vec![
            MatchRecord::loss("Guile"),
            MatchRecord::win("Blanka"),
            MatchRecord::loss("Guile"),
            MatchRecord::loss("Chun-Li"),
        ];
        assert_eq!(analyze(&records), pair("Guile", "Blanka"));
    }

    #[test]
    fn test_analyze_mixed_ties_in_both_categories() {
        let records = vec![
            MatchRecord::loss("Ken"),
            MatchRecord::win("Guile"),
            MatchRecord::loss("Blanka"),
            MatchRecord::win("Ryu"),
            MatchRecord::win("Guile"),
            MatchRecord::win("Ryu"),
            MatchRecord::loss("Blanka"),
            MatchRecord::loss("Ken"),
        ];
        assert_eq!(analyze(&records), pair("Ken, Blanka", "Guile, Ryu"));
    }

    #[test]
    fn test_analyze_tally_is_order_independent() {
        let records = vec![
            MatchRecord::win("Ken"),
            MatchRecord::win("Ryu"),
            MatchRecord::win("Ryu"),
        ];
        assert_eq!(analyze(&records).1, "Ryu");
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let records = vec![
            MatchRecord::win("Ryu"),
            MatchRecord::loss("Ken"),
            MatchRecord::win("Ken"),
        ];
        let first = analyze(&records);
        let second = analyze(&records);
        assert_eq!(first, second);
        assert_eq!(first, pair("Ken", "Ryu, Ken"));
    }

    #[test]
    fn test_summarize_matches_analyze() {
        let records = vec![MatchRecord::loss("Guile"), MatchRecord::win("Ryu")];
        let summary = summarize(&records);
        assert_eq!(summary, ResultSummary::new("Guile", "Ryu"));
        assert_eq!(summary.into_tuple(), analyze(&records));
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(most_frequent(Vec::<&str>::new()), NO_CURRENT_DATA);
    }

    #[test]
    fn test_tally_helper() {
        let t = tally(["Ryu", "Ryu", "Ken"]);
        assert_eq!(t.get("Ryu"), 2);
        assert_eq!(t.get("Ken"), 1);
    }
}
