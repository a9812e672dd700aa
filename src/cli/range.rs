//! CLI arguments describing a date range, and the `range` command
//!
//! Prints the generated, labelled dates without diffing them.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_range_table;
use crate::error::DocHuntResult;
use crate::models::WeekdayLabel;
use crate::services::DateRangeGenerator;

/// Range arguments shared by `range` and `check`
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Start date (MMDD, e.g. 0818); defaults to the configured start
    pub start: Option<String>,

    /// End date (MMDD, inclusive); defaults to the configured end
    pub end: Option<String>,

    /// Weekday the start date falls on (월..일 or Mon..Sun)
    #[arg(short, long)]
    pub weekday: Option<String>,

    /// Keep days labelled Saturday or Sunday
    #[arg(long, conflicts_with = "skip_weekends")]
    pub include_weekends: bool,

    /// Drop days labelled Saturday or Sunday
    #[arg(long)]
    pub skip_weekends: bool,

    /// Year the dates belong to; defaults to the configured year
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// A range with every default filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange {
    pub start: String,
    pub end: String,
    pub weekday: WeekdayLabel,
    pub skip_weekends: bool,
    pub year: i32,
}

impl RangeArgs {
    /// Fill unset arguments from settings
    pub fn resolve(&self, settings: &Settings) -> DocHuntResult<ResolvedRange> {
        let weekday = match &self.weekday {
            Some(w) => w.parse()?,
            None => settings.default_weekday,
        };

        let skip_weekends = if self.include_weekends {
            false
        } else if self.skip_weekends {
            true
        } else {
            settings.skip_weekends
        };

        Ok(ResolvedRange {
            start: self
                .start
                .clone()
                .unwrap_or_else(|| settings.default_start.clone()),
            end: self
                .end
                .clone()
                .unwrap_or_else(|| settings.default_end.clone()),
            weekday,
            skip_weekends,
            year: self.year.unwrap_or(settings.year),
        })
    }
}

/// Handle the `range` command
pub fn handle_range_command(settings: &Settings, args: RangeArgs) -> DocHuntResult<()> {
    let range = args.resolve(settings)?;
    let entries = DateRangeGenerator::new(range.year).generate(
        &range.start,
        &range.end,
        range.weekday,
        range.skip_weekends,
    )?;

    println!("{}", format_range_table(&entries, None));
    println!();
    println!("{} date(s)", entries.len());

    Ok(())
}
