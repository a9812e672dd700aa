//! Generated date range entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_key::DateKey;
use super::weekday::WeekdayLabel;

/// One day of a generated range with its cyclic weekday label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeEntry {
    /// Calendar date in the configured year
    pub date: NaiveDate,
    /// Label assigned by the weekday cursor, not the calendar weekday
    pub weekday: WeekdayLabel,
}

impl DateRangeEntry {
    pub fn new(date: NaiveDate, weekday: WeekdayLabel) -> Self {
        Self { date, weekday }
    }

    /// The `MMDD` key of this entry
    pub fn date_key(&self) -> DateKey {
        DateKey::from_date(self.date)
    }
}
