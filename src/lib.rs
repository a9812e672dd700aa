//! DocHunt - find missing daily documents
//!
//! Given a date range, the weekday the range is assumed to start on, and the
//! dates a user already holds documents for, DocHunt lists the dates that
//! still need one. Weekday labels are counted forward from the user's choice
//! rather than looked up in a calendar, and weekend-labelled days can be
//! excluded.
//!
//! # Architecture
//!
//! - `models`: date keys, weekday labels, range entries, held set, report
//! - `services`: range generation, gap analysis, and the check service
//! - `config`: path resolution and settings
//! - `display`: text summaries and tables
//! - `export`: JSON, YAML and CSV output
//! - `cli`: command handlers
//! - `tui`: the interactive form
//!
//! # Example
//!
//! ```
//! use dochunt::models::{HeldDateSet, WeekdayLabel};
//! use dochunt::services::{analyze, DateRangeGenerator};
//!
//! let entries = DateRangeGenerator::new(2025)
//!     .generate("0818", "0822", WeekdayLabel::Mon, true)
//!     .unwrap();
//! let report = analyze(&entries, &HeldDateSet::parse("0818 0819 0822"));
//! assert_eq!(report.missing_count(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::DocHuntError;
