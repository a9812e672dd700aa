//! CSV Export functionality
//!
//! One row per expected date with its label and whether it is held.

use std::io::Write;

use crate::error::{DocHuntError, DocHuntResult};
use crate::services::CheckOutcome;

/// Write the expected dates of a check as CSV
pub fn export_check_csv<W: Write>(outcome: &CheckOutcome, writer: &mut W) -> DocHuntResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date_key", "date", "weekday", "status"])
        .map_err(|e| DocHuntError::Export(e.to_string()))?;

    for entry in &outcome.entries {
        let key = entry.date_key();
        let status = if outcome.held.contains(&key) {
            "held"
        } else {
            "missing"
        };
        let date = entry.date.format("%Y-%m-%d").to_string();

        csv_writer
            .write_record([key.as_str(), date.as_str(), entry.weekday.label(), status])
            .map_err(|e| DocHuntError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| DocHuntError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::json::tests::sample;

    #[test]
    fn test_csv_export() {
        let (_request, outcome) = sample();

        let mut buffer = Vec::new();
        export_check_csv(&outcome, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "date_key,date,weekday,status");
        assert_eq!(lines[1], "0818,2025-08-18,월,held");
        assert_eq!(lines[3], "0820,2025-08-20,수,missing");
    }
}
