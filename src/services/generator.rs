//! Date range generation
//!
//! Walks from a start key to an end key one calendar day at a time, labelling
//! each day from a weekday cursor seeded by the caller. The cursor ignores the
//! real calendar: if the caller says `0818` is a Monday, `0823` is a Saturday
//! no matter what a calendar says. Weekend-labelled days can be dropped.

use tracing::debug;

use crate::error::DocHuntResult;
use crate::models::{DateKey, DateRangeEntry, WeekdayLabel};

/// Year used when none is configured
pub const DEFAULT_YEAR: i32 = 2025;

/// Generates labelled date ranges within a single year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangeGenerator {
    year: i32,
}

impl DateRangeGenerator {
    /// Create a generator for the given year
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// The year month/day keys are resolved against
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Generate the labelled days from `start` to `end` inclusive
    ///
    /// Both keys must be four digits naming a real day in the configured
    /// year. A start after the end yields an empty range rather than an
    /// error. With `skip_weekends`, days labelled Sat or Sun are left out
    /// entirely.
    pub fn generate(
        &self,
        start: &str,
        end: &str,
        start_weekday: WeekdayLabel,
        skip_weekends: bool,
    ) -> DocHuntResult<Vec<DateRangeEntry>> {
        let start_key = DateKey::parse(start)?;
        let end_key = DateKey::parse(end)?;
        let start_date = start_key.to_date(self.year)?;
        let end_date = end_key.to_date(self.year)?;

        let entries: Vec<DateRangeEntry> = start_date
            .iter_days()
            .take_while(|date| *date <= end_date)
            .enumerate()
            .map(|(offset, date)| DateRangeEntry::new(date, start_weekday.advance(offset)))
            .filter(|entry| !(skip_weekends && entry.weekday.is_weekend()))
            .collect();

        debug!(
            start = %start_key,
            end = %end_key,
            year = self.year,
            start_weekday = start_weekday.short_name(),
            skip_weekends,
            count = entries.len(),
            "generated date range"
        );

        Ok(entries)
    }
}

impl Default for DateRangeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_YEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn keys(entries: &[DateRangeEntry]) -> Vec<String> {
        entries.iter().map(|e| e.date_key().to_string()).collect()
    }

    #[test]
    fn test_weekdays_only_span() {
        let generator = DateRangeGenerator::default();
        let entries = generator
            .generate("0818", "0822", WeekdayLabel::Mon, true)
            .unwrap();

        assert_eq!(entries.len(), 5);
        assert_eq!(keys(&entries), vec!["0818", "0819", "0820", "0821", "0822"]);
        let labels: Vec<WeekdayLabel> = entries.iter().map(|e| e.weekday).collect();
        assert_eq!(
            labels,
            vec![
                WeekdayLabel::Mon,
                WeekdayLabel::Tue,
                WeekdayLabel::Wed,
                WeekdayLabel::Thu,
                WeekdayLabel::Fri
            ]
        );
    }

    #[test]
    fn test_weekend_labels_skipped() {
        let generator = DateRangeGenerator::default();
        let entries = generator
            .generate("0818", "0824", WeekdayLabel::Mon, true)
            .unwrap();

        assert_eq!(entries.len(), 5);
        assert_eq!(keys(&entries), vec!["0818", "0819", "0820", "0821", "0822"]);
    }

    #[test]
    fn test_labels_ignore_real_calendar() {
        // 2025-08-18 is really a Monday; claim it is a Saturday instead.
        let generator = DateRangeGenerator::default();
        let entries = generator
            .generate("0818", "0824", WeekdayLabel::Sat, true)
            .unwrap();

        assert_eq!(keys(&entries), vec!["0820", "0821", "0822", "0823", "0824"]);
        assert_eq!(entries[0].weekday, WeekdayLabel::Mon);
    }

    #[test]
    fn test_count_without_skipping() {
        let generator = DateRangeGenerator::default();
        let entries = generator
            .generate("0818", "0909", WeekdayLabel::Mon, false)
            .unwrap();

        let start = NaiveDate::from_ymd_opt(2025, 8, 18).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 9, 9).unwrap();
        assert_eq!(entries.len() as i64, (end - start).num_days() + 1);
        assert!(entries.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_labels_cycle_from_seed() {
        let generator = DateRangeGenerator::default();
        let entries = generator
            .generate("0101", "0131", WeekdayLabel::Thu, false)
            .unwrap();

        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.weekday, WeekdayLabel::ALL[(3 + i) % 7]);
        }
    }

    #[test]
    fn test_skipping_removes_exactly_weekend_labels() {
        let generator = DateRangeGenerator::default();
        let all = generator
            .generate("0301", "0430", WeekdayLabel::Wed, false)
            .unwrap();
        let weekdays = generator
            .generate("0301", "0430", WeekdayLabel::Wed, true)
            .unwrap();

        let weekend_count = all.iter().filter(|e| e.weekday.is_weekend()).count();
        assert_eq!(weekdays.len(), all.len() - weekend_count);
        assert!(weekdays.iter().all(|e| !e.weekday.is_weekend()));
    }

    #[test]
    fn test_single_day() {
        let generator = DateRangeGenerator::default();
        let entries = generator
            .generate("0818", "0818", WeekdayLabel::Sun, false)
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].weekday, WeekdayLabel::Sun);

        let skipped = generator
            .generate("0818", "0818", WeekdayLabel::Sun, true)
            .unwrap();
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_start_after_end_is_empty() {
        let generator = DateRangeGenerator::default();
        let entries = generator
            .generate("0909", "0818", WeekdayLabel::Mon, true)
            .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_bad_format_fails() {
        let generator = DateRangeGenerator::default();
        let err = generator
            .generate("abc1", "0822", WeekdayLabel::Mon, true)
            .unwrap_err();
        assert!(err.is_format());

        let err = generator
            .generate("0818", "822", WeekdayLabel::Mon, true)
            .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_impossible_day_fails() {
        let generator = DateRangeGenerator::default();
        let err = generator
            .generate("0230", "0305", WeekdayLabel::Mon, false)
            .unwrap_err();
        assert!(err.is_format());
        assert_eq!(err.to_string(), "0230 is not a valid date in 2025");
    }

    #[test]
    fn test_year_is_configurable() {
        let leap = DateRangeGenerator::new(2024);
        let entries = leap.generate("0228", "0301", WeekdayLabel::Mon, false).unwrap();
        assert_eq!(keys(&entries), vec!["0228", "0229", "0301"]);

        let common = DateRangeGenerator::new(2025);
        let entries = common.generate("0228", "0301", WeekdayLabel::Mon, false).unwrap();
        assert_eq!(keys(&entries), vec!["0228", "0301"]);
    }

    #[test]
    fn test_year_end_stays_in_year() {
        let generator = DateRangeGenerator::default();
        let entries = generator
            .generate("1230", "1231", WeekdayLabel::Mon, false)
            .unwrap();
        assert_eq!(keys(&entries), vec!["1230", "1231"]);
    }
}
