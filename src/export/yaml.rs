//! YAML Export functionality
//!
//! Exports a check result to YAML for human reading.

use std::io::Write;

use crate::error::{DocHuntError, DocHuntResult};
use crate::export::json::CheckExport;

/// Write a check export as YAML with a comment header
pub fn export_check_yaml<W: Write>(export: &CheckExport, writer: &mut W) -> DocHuntResult<()> {
    writeln!(writer, "# DocHunt check result")
        .map_err(|e| DocHuntError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| DocHuntError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| DocHuntError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| DocHuntError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| DocHuntError::Export(e.to_string()))?;

    Ok(())
}
