//! TUI Views module
//!
//! The check form and the status bar, with dialogs drawn on top.

pub mod form;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{error_dialog_area, ErrorDialog};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Result(summary) => {
            dialogs::result::render(frame, summary);
        }
        ActiveDialog::Error(info) => {
            let area = error_dialog_area(frame.area());
            frame.render_widget(ErrorDialog::new(info), area);
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame);
        }
        ActiveDialog::None => {}
    }
}
