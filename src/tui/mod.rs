//! Terminal User Interface module
//!
//! A single-screen form using ratatui: enter a date range, the weekday it
//! starts on and the dates already held, then check which are missing.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
