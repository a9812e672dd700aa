//! Core data models for DocHunt
//!
//! Date keys, weekday labels, generated range entries, the held date set and
//! the resulting gap report.

pub mod date_key;
pub mod entry;
pub mod held;
pub mod report;
pub mod weekday;

pub use date_key::DateKey;
pub use entry::DateRangeEntry;
pub use held::HeldDateSet;
pub use report::GapReport;
pub use weekday::WeekdayLabel;
