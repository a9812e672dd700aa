//! Check service
//!
//! Runs one "check" action: raw form values in, gap report out.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::error::DocHuntResult;
use crate::models::{DateRangeEntry, GapReport, HeldDateSet, WeekdayLabel};

use super::analyzer::analyze;
use super::generator::DateRangeGenerator;

/// The five values a check is run from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Start key as typed (MMDD)
    pub start: String,
    /// End key as typed (MMDD)
    pub end: String,
    /// Weekday the start date is assumed to fall on
    pub start_weekday: WeekdayLabel,
    /// Drop Sat/Sun labelled days
    pub skip_weekends: bool,
    /// Held dates as free text
    pub held_raw: String,
}

impl CheckRequest {
    /// A request pre-filled from the configured defaults
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            start: settings.default_start.clone(),
            end: settings.default_end.clone(),
            start_weekday: settings.default_weekday,
            skip_weekends: settings.skip_weekends,
            held_raw: settings.default_held.clone(),
        }
    }
}

/// Everything produced by a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Expected days after weekend filtering
    pub entries: Vec<DateRangeEntry>,
    /// Parsed held dates
    pub held: HeldDateSet,
    /// Totals and missing keys
    pub report: GapReport,
}

/// Service running checks against a fixed year
pub struct CheckService {
    generator: DateRangeGenerator,
}

impl CheckService {
    /// Create a new check service for a year
    pub fn new(year: i32) -> Self {
        Self {
            generator: DateRangeGenerator::new(year),
        }
    }

    /// The year checks are resolved against
    pub fn year(&self) -> i32 {
        self.generator.year()
    }

    /// Generate, diff and summarize
    ///
    /// Fails fast on a malformed start or end key; there is no partial result.
    pub fn run(&self, request: &CheckRequest) -> DocHuntResult<CheckOutcome> {
        let entries = self
            .generator
            .generate(
                &request.start,
                &request.end,
                request.start_weekday,
                request.skip_weekends,
            )
            .inspect_err(|e| {
                warn!(start = %request.start, end = %request.end, error = %e, "check rejected")
            })?;

        let held = HeldDateSet::parse(&request.held_raw);
        let report = analyze(&entries, &held);

        info!(
            total = report.total,
            held = report.held_count,
            missing = report.missing_count(),
            "check complete"
        );

        Ok(CheckOutcome {
            entries,
            held,
            report,
        })
    }
}

impl Default for CheckService {
    fn default() -> Self {
        Self {
            generator: DateRangeGenerator::default(),
        }
    }
}
