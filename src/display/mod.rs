//! Display formatting for terminal output
//!
//! Text summaries of gap reports and tables of generated ranges.

pub mod range;
pub mod report;

pub use range::format_range_table;
pub use report::{format_check_error, format_gap_report, format_missing_list};
