//! Error dialog widget
//!
//! Displays a failed check with the input prompt and recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::display::format_check_error;
use crate::error::DocHuntError;

/// An error dialog with details and suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from a DocHuntError
    pub fn from_error(error: &DocHuntError) -> Self {
        let (title, suggestions) = match error {
            DocHuntError::Format(_) => (
                "Date Format",
                vec![
                    "Enter start and end as four digits, month then day (e.g. 0818)".to_string(),
                    "Make sure the day exists in the configured year".to_string(),
                ],
            ),
            DocHuntError::Validation(_) => (
                "Validation Error",
                vec!["Review the input values and try again".to_string()],
            ),
            DocHuntError::Config(_) => (
                "Configuration Error",
                vec!["Check config.json or run 'dochunt init' to reset it".to_string()],
            ),
            DocHuntError::Io(_) | DocHuntError::Export(_) => (
                "I/O Error",
                vec!["Check file permissions and available disk space".to_string()],
            ),
        };

        Self {
            title: title.to_string(),
            details: format_check_error(error),
            suggestions,
        }
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    /// Create a new error dialog widget
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" 에러: {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];

            for suggestion in &self.error.suggestions {
                lines.push(Line::from(vec![
                    Span::raw("  - "),
                    Span::raw(suggestion.as_str()),
                ]));
            }

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 80).min(parent.width);
    let height = (parent.height * 50 / 100).clamp(12, 20).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
