//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog, or to the form when no dialog
//! is open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;
use super::views::form;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {}
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    form::handle_key(app, key);
}

/// Any dialog closes on Esc, Enter or q; Ctrl-C still quits
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_dialog(),
        _ => {}
    }
}
