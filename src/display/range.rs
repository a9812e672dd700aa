//! Date range table formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{DateRangeEntry, HeldDateSet};

#[derive(Tabled)]
struct RangeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format generated entries as a table
///
/// When `held` is given, each row is marked held or missing.
pub fn format_range_table(entries: &[DateRangeEntry], held: Option<&HeldDateSet>) -> String {
    if entries.is_empty() {
        return "No dates in range.".to_string();
    }

    let rows = entries.iter().map(|entry| {
        let key = entry.date_key();
        let status = match held {
            Some(set) if set.contains(&key) => "held",
            Some(_) => "missing",
            None => "",
        };
        RangeRow {
            date: entry.date.format("%Y-%m-%d").to_string(),
            key: key.to_string(),
            label: format!("{} ({})", entry.weekday.label(), entry.weekday.short_name()),
            status,
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeekdayLabel;
    use crate::services::DateRangeGenerator;

    #[test]
    fn test_empty_range() {
        assert_eq!(format_range_table(&[], None), "No dates in range.");
    }

    #[test]
    fn test_table_lists_every_entry() {
        let entries = DateRangeGenerator::default()
            .generate("0818", "0820", WeekdayLabel::Mon, false)
            .unwrap();
        let held = HeldDateSet::parse("0819");
        let table = format_range_table(&entries, Some(&held));

        assert!(table.contains("2025-08-18"));
        assert!(table.contains("0820"));
        assert!(table.contains("Tue"));
        assert!(table.contains("held"));
        assert!(table.contains("missing"));
    }
}
