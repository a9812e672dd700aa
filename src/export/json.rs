//! JSON Export functionality
//!
//! Exports a check result to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{DocHuntError, DocHuntResult};
use crate::models::GapReport;
use crate::services::{CheckOutcome, CheckRequest};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A check result with the inputs that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Year the keys were resolved against
    pub year: i32,

    /// The request as entered
    pub request: CheckRequest,

    /// The computed report
    pub report: GapReport,

    /// Derived counts for readers that don't recount
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of missing dates
    pub missing_count: usize,

    /// Distinct tokens in the held text, including ones outside the range
    pub held_token_count: usize,
}

impl CheckExport {
    /// Build an export from a finished check
    pub fn new(year: i32, request: &CheckRequest, outcome: &CheckOutcome) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            year,
            request: request.clone(),
            report: outcome.report.clone(),
            metadata: ExportMetadata {
                missing_count: outcome.report.missing_count(),
                held_token_count: outcome.held.len(),
            },
        }
    }
}

/// Write a check export as pretty JSON
pub fn export_check_json<W: Write>(export: &CheckExport, writer: &mut W) -> DocHuntResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| DocHuntError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| DocHuntError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::WeekdayLabel;
    use crate::services::CheckService;

    pub(crate) fn sample() -> (CheckRequest, CheckOutcome) {
        let request = CheckRequest {
            start: "0818".into(),
            end: "0822".into(),
            start_weekday: WeekdayLabel::Mon,
            skip_weekends: true,
            held_raw: "0818 0819 0822 0101".into(),
        };
        let outcome = CheckService::default().run(&request).unwrap();
        (request, outcome)
    }

    #[test]
    fn test_json_export() {
        let (request, outcome) = sample();
        let export = CheckExport::new(2025, &request, &outcome);

        let mut buffer = Vec::new();
        export_check_json(&export, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["year"], 2025);
        assert_eq!(value["report"]["total"], 5);
        assert_eq!(value["report"]["held_count"], 3);
        assert_eq!(value["report"]["missing"][0], "0820");
        assert_eq!(value["metadata"]["held_token_count"], 4);
    }
}
