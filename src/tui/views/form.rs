//! Check form
//!
//! The main screen: start and end dates, the assumed starting weekday, the
//! weekend toggle, the held dates text area and a confirm button.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::settings::Settings;
use crate::models::WeekdayLabel;
use crate::services::CheckRequest;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::{TextInput, TextInputWidget};

/// Which field is focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Start,
    End,
    Weekday,
    SkipWeekends,
    Held,
    Confirm,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Weekday,
            Self::Weekday => Self::SkipWeekends,
            Self::SkipWeekends => Self::Held,
            Self::Held => Self::Confirm,
            Self::Confirm => Self::Start,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Start => Self::Confirm,
            Self::End => Self::Start,
            Self::Weekday => Self::End,
            Self::SkipWeekends => Self::Weekday,
            Self::Held => Self::SkipWeekends,
            Self::Confirm => Self::Held,
        }
    }

    /// Whether this field takes typed text
    pub fn is_text(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Held)
    }
}

/// State for the check form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Start date input (MMDD)
    pub start: TextInput,
    /// End date input (MMDD)
    pub end: TextInput,
    /// Selected starting weekday
    pub weekday: WeekdayLabel,
    /// Weekend exclusion checkbox
    pub skip_weekends: bool,
    /// Held dates text area
    pub held: TextInput,
    /// Which field is focused
    pub focused_field: FormField,
}

impl FormState {
    /// Pre-fill the form from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            start: TextInput::new().with_content(settings.default_start.clone()),
            end: TextInput::new().with_content(settings.default_end.clone()),
            weekday: settings.default_weekday,
            skip_weekends: settings.skip_weekends,
            held: TextInput::multiline().with_content(settings.default_held.clone()),
            focused_field: FormField::Start,
        }
    }

    /// Snapshot the current values
    pub fn to_request(&self) -> CheckRequest {
        CheckRequest {
            start: self.start.value().to_string(),
            end: self.end.value().to_string(),
            start_weekday: self.weekday,
            skip_weekends: self.skip_weekends,
            held_raw: self.held.value().to_string(),
        }
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The focused text input, if the focused field is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Start => Some(&mut self.start),
            FormField::End => Some(&mut self.end),
            FormField::Held => Some(&mut self.held),
            _ => None,
        }
    }

    /// Select the next weekday label, wrapping
    pub fn next_weekday(&mut self) {
        self.weekday = self.weekday.advance(1);
    }

    /// Select the previous weekday label, wrapping
    pub fn prev_weekday(&mut self) {
        self.weekday = self.weekday.advance(6);
    }

    /// Flip the weekend checkbox
    pub fn toggle_skip_weekends(&mut self) {
        self.skip_weekends = !self.skip_weekends;
    }
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

/// Render the form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let state = &app.form;

    let block = Block::default()
        .title(format!(" 서류미아찾기 ({}) ", app.settings.year))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = FormLayout::new(inner);
    let focus = state.focused_field;

    frame.render_widget(
        Paragraph::new(Span::styled(
            "시작 일자 (MMDD)",
            label_style(focus == FormField::Start),
        )),
        layout.start_label,
    );
    frame.render_widget(
        TextInputWidget::new(&state.start, focus == FormField::Start),
        layout.start_input,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "기준 일자 (MMDD)",
            label_style(focus == FormField::End),
        )),
        layout.end_label,
    );
    frame.render_widget(
        TextInputWidget::new(&state.end, focus == FormField::End),
        layout.end_input,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "시작 요일 선택",
            label_style(focus == FormField::Weekday),
        )),
        layout.weekday_label,
    );
    frame.render_widget(
        Paragraph::new(weekday_line(state.weekday, focus == FormField::Weekday)),
        layout.weekday,
    );

    let checkbox = if state.skip_weekends { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(checkbox, label_style(focus == FormField::SkipWeekends)),
            Span::raw(" 주말 제외"),
        ])),
        layout.skip_weekends,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            "보유한 서류 일자 (MMDD, 공백 구분)",
            label_style(focus == FormField::Held),
        )),
        layout.held_label,
    );
    let held_block = Block::default()
        .borders(Borders::ALL)
        .border_style(label_style(focus == FormField::Held));
    let held_inner = held_block.inner(layout.held);
    frame.render_widget(held_block, layout.held);
    frame.render_widget(
        TextInputWidget::new(&state.held, focus == FormField::Held),
        held_inner,
    );

    let button_style = if focus == FormField::Confirm {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" 확인 ", button_style),
            Span::styled(
                "   [Tab] Fields  [F5] Check  [?] Help  [Esc] Quit",
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        layout.confirm,
    );
}

fn weekday_line(selected: WeekdayLabel, focused: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for weekday in WeekdayLabel::ALL {
        let marker = if weekday == selected { "(•)" } else { "( )" };
        let style = if weekday == selected && focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if weekday == selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("{} {}", marker, weekday.label()), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Handle key events for the form
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let focus = app.form.focused_field;

    match key.code {
        KeyCode::Esc => {
            app.quit();
        }

        KeyCode::Char('c') if ctrl => {
            app.quit();
        }

        KeyCode::F(5) => {
            app.run_check();
        }

        KeyCode::Char('s') if ctrl => {
            app.run_check();
        }

        KeyCode::Tab => {
            app.form.next_field();
        }

        KeyCode::BackTab => {
            app.form.prev_field();
        }

        KeyCode::Down if focus != FormField::Held => {
            app.form.next_field();
        }

        KeyCode::Up if focus != FormField::Held => {
            app.form.prev_field();
        }

        KeyCode::Enter if focus == FormField::Held => {
            app.form.held.insert('\n');
        }

        KeyCode::Enter => {
            app.run_check();
        }

        KeyCode::Char('u') if ctrl => {
            if let Some(input) = app.form.focused_input() {
                input.clear();
            }
        }

        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
        }

        KeyCode::Char('?') if !focus.is_text() => {
            app.open_dialog(ActiveDialog::Help);
        }

        KeyCode::Left | KeyCode::Char('h') if focus == FormField::Weekday => {
            app.form.prev_weekday();
        }

        KeyCode::Right | KeyCode::Char('l') if focus == FormField::Weekday => {
            app.form.next_weekday();
        }

        KeyCode::Char(c) if focus == FormField::Weekday => {
            if let Ok(weekday) = c.to_string().parse::<WeekdayLabel>() {
                app.form.weekday = weekday;
            }
        }

        KeyCode::Char(' ') if focus == FormField::SkipWeekends => {
            app.form.toggle_skip_weekends();
        }

        KeyCode::Char(' ') if focus == FormField::Confirm => {
            app.run_check();
        }

        _ => handle_text_key(app, key),
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    let Some(input) = app.form.focused_input() else {
        return;
    };

    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return,
    }

    app.clear_status();
}
