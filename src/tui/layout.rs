//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: form panel and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            main: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Rows of the check form
pub struct FormLayout {
    pub start_label: Rect,
    pub start_input: Rect,
    pub end_label: Rect,
    pub end_input: Rect,
    pub weekday_label: Rect,
    pub weekday: Rect,
    pub skip_weekends: Rect,
    pub held_label: Rect,
    /// Held dates text area, bordered
    pub held: Rect,
    pub confirm: Rect,
}

impl FormLayout {
    /// Calculate form layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Start label
                Constraint::Length(1), // Start input
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // End label
                Constraint::Length(1), // End input
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Weekday label
                Constraint::Length(1), // Weekday radio row
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Weekend checkbox
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Held label
                Constraint::Min(4),    // Held text area
                Constraint::Length(1), // Confirm
            ])
            .split(area);

        Self {
            start_label: chunks[0],
            start_input: chunks[1],
            end_label: chunks[3],
            end_input: chunks[4],
            weekday_label: chunks[6],
            weekday: chunks[7],
            skip_weekends: chunks[9],
            held_label: chunks[11],
            held: chunks[12],
            confirm: chunks[13],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_reserves_status_bar() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.main.height, 29);
    }

    #[test]
    fn test_form_layout_gives_held_area_the_slack() {
        let layout = FormLayout::new(Rect::new(0, 0, 60, 30));
        assert!(layout.held.height >= 4);
        assert!(layout.confirm.y > layout.held.y);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = centered_rect_fixed(100, 50, Rect::new(0, 0, 40, 20));
        assert_eq!(area.width, 40);
        assert_eq!(area.height, 20);
    }
}
