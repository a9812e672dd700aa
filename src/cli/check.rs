//! CLI command for checking held documents
//!
//! Runs one check from command line arguments and prints the summary, or an
//! export of it.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use super::range::RangeArgs;
use crate::config::settings::Settings;
use crate::display::format_gap_report;
use crate::error::{DocHuntError, DocHuntResult};
use crate::export::{export_check_csv, export_check_json, export_check_yaml, CheckExport};
use crate::services::{CheckOutcome, CheckRequest, CheckService};

/// Output format for `check`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text summary
    #[default]
    Text,
    /// JSON export
    Json,
    /// YAML export
    Yaml,
    /// One CSV row per expected date
    Csv,
}

/// Arguments for `check`
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Held dates, whitespace separated (e.g. "0818 0819 0822")
    #[arg(long, conflicts_with = "held_file")]
    pub held: Option<String>,

    /// Read held dates from a file ("-" for stdin)
    #[arg(long)]
    pub held_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the `check` command
pub fn handle_check_command(settings: &Settings, args: CheckArgs) -> DocHuntResult<()> {
    let range = args.range.resolve(settings)?;
    let held_raw = read_held(&args, settings)?;

    let request = CheckRequest {
        start: range.start,
        end: range.end,
        start_weekday: range.weekday,
        skip_weekends: range.skip_weekends,
        held_raw,
    };

    let service = CheckService::new(range.year);
    let outcome = service.run(&request)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                DocHuntError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_outcome(args.format, service.year(), &request, &outcome, &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), "check written");
            println!("Wrote {} result to {}", format_name(args.format), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_outcome(args.format, service.year(), &request, &outcome, &mut handle)?;
        }
    }

    Ok(())
}

/// Write an outcome in the requested format
pub fn write_outcome<W: Write>(
    format: OutputFormat,
    year: i32,
    request: &CheckRequest,
    outcome: &CheckOutcome,
    writer: &mut W,
) -> DocHuntResult<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "{}", format_gap_report(&outcome.report))?;
            Ok(())
        }
        OutputFormat::Json => export_check_json(&CheckExport::new(year, request, outcome), writer),
        OutputFormat::Yaml => export_check_yaml(&CheckExport::new(year, request, outcome), writer),
        OutputFormat::Csv => export_check_csv(outcome, writer),
    }
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "JSON",
        OutputFormat::Yaml => "YAML",
        OutputFormat::Csv => "CSV",
    }
}

fn read_held(args: &CheckArgs, settings: &Settings) -> DocHuntResult<String> {
    if let Some(text) = &args.held {
        return Ok(text.clone());
    }

    match &args.held_file {
        Some(path) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            DocHuntError::Io(format!("Failed to read {}: {}", path.display(), e))
        }),
        None => Ok(settings.default_held.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeekdayLabel;
    use tempfile::TempDir;

    fn args() -> CheckArgs {
        CheckArgs {
            range: RangeArgs::default(),
            held: None,
            held_file: None,
            format: OutputFormat::Text,
            output: None,
        }
    }

    #[test]
    fn test_held_defaults_to_settings() {
        let settings = Settings::default();
        assert_eq!(read_held(&args(), &settings).unwrap(), "0818 0819 0822");
    }

    #[test]
    fn test_held_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("held.txt");
        std::fs::write(&path, "0901\n0902\n").unwrap();

        let mut a = args();
        a.held_file = Some(path);
        assert_eq!(read_held(&a, &Settings::default()).unwrap(), "0901\n0902\n");
    }

    #[test]
    fn test_write_text_outcome() {
        let request = CheckRequest {
            start: "0818".into(),
            end: "0822".into(),
            start_weekday: WeekdayLabel::Mon,
            skip_weekends: true,
            held_raw: "0818 0819 0820 0821 0822".into(),
        };
        let outcome = CheckService::default().run(&request).unwrap();

        let mut buffer = Vec::new();
        write_outcome(OutputFormat::Text, 2025, &request, &outcome, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("보유한 서류: 5일"));
        assert!(text.contains("빠진 날짜 없음 ✅"));
    }

    #[test]
    fn test_check_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");

        let mut a = args();
        a.range.start = Some("0818".into());
        a.range.end = Some("0824".into());
        a.held = Some("0818".into());
        a.format = OutputFormat::Json;
        a.output = Some(path.clone());

        handle_check_command(&Settings::default(), a).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["report"]["total"], 5);
        assert_eq!(value["report"]["held_count"], 1);
    }
}
