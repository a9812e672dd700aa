//! Export module for DocHunt
//!
//! Writes check results in machine-readable formats:
//! - CSV: one row per expected date (spreadsheet-compatible)
//! - JSON: the full request and report
//! - YAML: the same, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_check_csv;
pub use json::{export_check_json, CheckExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_check_yaml;
