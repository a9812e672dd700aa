//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The form's field values live here; checks run on a snapshot of them.

use tracing::debug;

use crate::config::settings::Settings;
use crate::display::format_gap_report;
use crate::services::CheckService;

use super::views::form::FormState;
use super::widgets::ErrorInfo;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Summary text of a finished check
    Result(String),
    /// A check that failed
    Error(ErrorInfo),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Runs checks against the configured year
    pub service: CheckService,

    /// The input form
    pub form: FormState,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Transient status message
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App with the form pre-filled from settings
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            service: CheckService::new(settings.year),
            form: FormState::from_settings(settings),
            active_dialog: ActiveDialog::None,
            should_quit: false,
            status_message: None,
        }
    }

    /// Request the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether any dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Run a check on the current form values and open the outcome dialog
    pub fn run_check(&mut self) {
        let request = self.form.to_request();
        debug!(?request, "running check from form");

        match self.service.run(&request) {
            Ok(outcome) => {
                self.set_status(format!(
                    "{} expected, {} missing",
                    outcome.report.total,
                    outcome.report.missing_count()
                ));
                self.open_dialog(ActiveDialog::Result(format_gap_report(&outcome.report)));
            }
            Err(e) => {
                self.set_status("Check failed");
                self.open_dialog(ActiveDialog::Error(ErrorInfo::from_error(&e)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_check() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.run_check();

        match &app.active_dialog {
            ActiveDialog::Result(text) => {
                assert!(text.starts_with("총 작성해야 할 날짜: 17일"));
                assert!(text.contains("보유한 서류: 3일"));
            }
            other => panic!("expected result dialog, got {:?}", other),
        }
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_bad_input_opens_error_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.form.start.set_content("abc1");

        app.run_check();

        match &app.active_dialog {
            ActiveDialog::Error(info) => assert!(info.details.contains("abc1")),
            other => panic!("expected error dialog, got {:?}", other),
        }
        assert!(!app.should_quit);
    }

    #[test]
    fn test_dialog_lifecycle() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        assert!(!app.has_dialog());
        app.open_dialog(ActiveDialog::Help);
        assert!(app.has_dialog());
        app.close_dialog();
        assert!(!app.has_dialog());
    }
}
