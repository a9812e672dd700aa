//! Weekday labels
//!
//! The seven fixed labels used both as the user's assumed starting weekday and
//! as the annotation on each generated date. Labels are a cyclic counter, not
//! the calendar weekday of the date they annotate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DocHuntError;

/// One of the seven weekday labels, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeekdayLabel {
    #[default]
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekdayLabel {
    /// All labels in cycle order
    pub const ALL: [WeekdayLabel; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Position in the cycle (Mon = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The label `n` steps after this one, wrapping every seven
    pub fn advance(self, n: usize) -> Self {
        Self::ALL[(self.index() + n) % 7]
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Mon => "월",
            Self::Tue => "화",
            Self::Wed => "수",
            Self::Thu => "목",
            Self::Fri => "금",
            Self::Sat => "토",
            Self::Sun => "일",
        }
    }

    /// English abbreviation
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }

    /// Whether this label is excluded by the weekend policy
    pub fn is_weekend(self) -> bool {
        matches!(self, Self::Sat | Self::Sun)
    }
}

impl fmt::Display for WeekdayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeekdayLabel {
    type Err = DocHuntError;

    /// Accepts the display label or an English name in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(found) = Self::ALL.iter().find(|w| w.label() == s) {
            return Ok(*found);
        }

        match s.to_lowercase().as_str() {
            "mon" | "monday" => Ok(Self::Mon),
            "tue" | "tues" | "tuesday" => Ok(Self::Tue),
            "wed" | "wednesday" => Ok(Self::Wed),
            "thu" | "thur" | "thurs" | "thursday" => Ok(Self::Thu),
            "fri" | "friday" => Ok(Self::Fri),
            "sat" | "saturday" => Ok(Self::Sat),
            "sun" | "sunday" => Ok(Self::Sun),
            _ => Err(DocHuntError::Validation(format!(
                "Unknown weekday '{}'. Use one of: 월 화 수 목 금 토 일 (or Mon..Sun)",
                s
            ))),
        }
    }
}
