//! Month-day keys identifying a document date
//!
//! A `DateKey` is the canonical four-digit `MMDD` string used both for the
//! generated dates and for the dates a user says they already hold.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DocHuntError, DocHuntResult};

/// A four-digit `MMDD` key, e.g. `"0818"`
///
/// Keys compare lexically, which within one year is the same as comparing
/// chronologically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Parse a key from user text
    ///
    /// Surrounding whitespace is ignored. Anything other than exactly four
    /// ASCII digits is a format error. Month and day ranges are not checked
    /// here; see [`DateKey::to_date`].
    pub fn parse(s: &str) -> DocHuntResult<Self> {
        let s = s.trim();
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DocHuntError::bad_mmdd(s));
        }
        Ok(Self(s.to_string()))
    }

    /// Build the key for a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{:02}{:02}", date.month(), date.day()))
    }

    /// The month digits as a number (not range-checked)
    pub fn month(&self) -> u32 {
        self.0[..2].parse().unwrap_or(0)
    }

    /// The day digits as a number (not range-checked)
    pub fn day(&self) -> u32 {
        self.0[2..].parse().unwrap_or(0)
    }

    /// Resolve the key against a year
    ///
    /// Fails with a format error when the month/day pair does not exist in
    /// that year (`0230`, `1301`, `0229` outside leap years).
    pub fn to_date(&self, year: i32) -> DocHuntResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .ok_or_else(|| DocHuntError::no_such_day(&self.0, year))
    }

    /// Borrow the key text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DateKey {
    type Err = DocHuntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
