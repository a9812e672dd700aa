//! Gap report formatting
//!
//! Renders a `GapReport` as the plain text summary shown after a check.

use crate::error::DocHuntError;
use crate::models::GapReport;

/// Shown instead of the missing list when nothing is missing
pub const NOTHING_MISSING: &str = "빠진 날짜 없음 ✅";

/// First line of every error shown to the user
pub const CHECK_INPUT_PROMPT: &str = "입력값을 확인해주세요.";

/// Format the summary block for a report
pub fn format_gap_report(report: &GapReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("총 작성해야 할 날짜: {}일\n", report.total));
    output.push_str(&format!("보유한 서류: {}일\n", report.held_count));
    output.push_str(&format!("빠진 서류: {}일\n\n", report.missing_count()));

    if report.is_complete() {
        output.push_str(NOTHING_MISSING);
    } else {
        output.push_str("빠진 날짜:\n");
        output.push_str(&format_missing_list(report));
    }

    output
}

/// Missing keys separated by single spaces
pub fn format_missing_list(report: &GapReport) -> String {
    report
        .missing
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an error the way the form presents it
pub fn format_check_error(error: &DocHuntError) -> String {
    format!("{}\n\n{}", CHECK_INPUT_PROMPT, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateKey;

    #[test]
    fn test_format_with_missing() {
        let report = GapReport {
            total: 5,
            held_count: 3,
            missing: vec![DateKey::parse("0820").unwrap(), DateKey::parse("0821").unwrap()],
        };

        assert_eq!(
            format_gap_report(&report),
            "총 작성해야 할 날짜: 5일\n보유한 서류: 3일\n빠진 서류: 2일\n\n빠진 날짜:\n0820 0821"
        );
    }

    #[test]
    fn test_format_nothing_missing() {
        let report = GapReport {
            total: 2,
            held_count: 2,
            missing: vec![],
        };

        assert_eq!(
            format_gap_report(&report),
            "총 작성해야 할 날짜: 2일\n보유한 서류: 2일\n빠진 서류: 0일\n\n빠진 날짜 없음 ✅"
        );
    }

    #[test]
    fn test_format_check_error() {
        let err = DocHuntError::bad_mmdd("abc1");
        assert_eq!(
            format_check_error(&err),
            "입력값을 확인해주세요.\n\nexpected MMDD format (e.g. 0818), got 'abc1'"
        );
    }
}
