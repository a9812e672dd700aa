//! Document gap analysis
//!
//! Diffs the generated dates against the held set.

use crate::models::{DateRangeEntry, GapReport, HeldDateSet};

/// Compare expected entries with the held set
///
/// Every entry counts once toward `total`; it is either held or missing.
/// Missing keys keep the order of `expected`.
pub fn analyze(expected: &[DateRangeEntry], held: &HeldDateSet) -> GapReport {
    let (held_keys, missing): (Vec<_>, Vec<_>) = expected
        .iter()
        .map(DateRangeEntry::date_key)
        .partition(|key| held.contains(key));

    GapReport {
        total: expected.len(),
        held_count: held_keys.len(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateKey, WeekdayLabel};
    use crate::services::DateRangeGenerator;

    fn expected(start: &str, end: &str) -> Vec<DateRangeEntry> {
        DateRangeGenerator::default()
            .generate(start, end, WeekdayLabel::Mon, true)
            .unwrap()
    }

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn test_partial_holdings() {
        let held = HeldDateSet::parse("0818 0819 0822");
        let report = analyze(&expected("0818", "0822"), &held);

        assert_eq!(report.total, 5);
        assert_eq!(report.held_count, 3);
        assert_eq!(report.missing, vec![key("0820"), key("0821")]);
        assert_eq!(report.missing_count(), 2);
    }

    #[test]
    fn test_empty_expected() {
        let held = HeldDateSet::parse("0818");
        let report = analyze(&[], &held);
        assert_eq!(report, GapReport::default());
    }

    #[test]
    fn test_duplicate_held_tokens_count_once() {
        let held = HeldDateSet::parse("0818 0818 0818");
        let report = analyze(&expected("0818", "0819"), &held);
        assert_eq!(report.held_count, 1);
        assert_eq!(report.missing, vec![key("0819")]);
    }

    #[test]
    fn test_held_outside_range_ignored() {
        let held = HeldDateSet::parse("0101 0823 0824 garbage");
        let report = analyze(&expected("0818", "0824"), &held);
        assert_eq!(report.total, 5);
        assert_eq!(report.held_count, 0);
        assert_eq!(report.missing_count(), 5);
    }

    #[test]
    fn test_counts_always_add_up() {
        let held = HeldDateSet::parse("0818 0901 0905 0909 1231");
        let entries = expected("0801", "0930");
        let report = analyze(&entries, &held);

        assert_eq!(report.held_count + report.missing_count(), report.total);
        assert!(report.missing.windows(2).all(|w| w[0] < w[1]));
        assert!(report.missing.iter().all(|k| !held.contains(k)));
    }

    #[test]
    fn test_idempotent() {
        let held = HeldDateSet::parse("0818 0819");
        let first = analyze(&expected("0818", "0909"), &held);
        let second = analyze(&expected("0818", "0909"), &held);
        assert_eq!(first, second);
    }
}
