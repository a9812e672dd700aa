//! Help dialog
//!
//! Shows the form's keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Form"),
        Line::from(""),
        key_line("Tab / Shift-Tab", "Next / previous field"),
        key_line("Up / Down", "Move between fields (outside the held area)"),
        key_line("Left / Right", "Pick the starting weekday"),
        key_line("Space", "Toggle weekend exclusion, or press 확인"),
        key_line("Enter", "Run the check (new line in the held area)"),
        key_line("F5 / Ctrl-S", "Run the check from any field"),
        key_line("Ctrl-U", "Clear the focused text field"),
        key_line("F1", "This help (? also works outside text fields)"),
        key_line("Esc / Ctrl-C", "Quit"),
        Line::from(""),
        section("Notes"),
        Line::from(""),
        Line::from("  Weekday labels count forward from the weekday you pick,"),
        Line::from("  whatever the real calendar says."),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
