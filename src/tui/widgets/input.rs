//! Text input widget
//!
//! A text field with a cursor. The cursor counts characters, not bytes, so
//! Hangul and other multi-byte input edits correctly. Fields may hold
//! newlines when used as a text area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A text input with cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Whether Enter inserts a newline
    multiline: bool,
}

impl TextInput {
    /// Create an empty single-line input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input that accepts newlines
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Set content, cursor at the end
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    /// Replace the content, cursor at the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    /// Whether Enter inserts a newline
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Build styled lines, drawing the cursor when focused
    pub fn lines(&self, focused: bool) -> Vec<Line<'static>> {
        let text_style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let cursor_style = Style::default().fg(Color::Black).bg(Color::Cyan);

        let mut lines = Vec::new();
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();

        for (pos, c) in self.content.chars().enumerate() {
            let at_cursor = focused && pos == self.cursor;
            if c == '\n' {
                if !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), text_style));
                }
                if at_cursor {
                    spans.push(Span::styled(" ", cursor_style));
                }
                lines.push(Line::from(std::mem::take(&mut spans)));
                continue;
            }
            if at_cursor {
                if !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), text_style));
                }
                spans.push(Span::styled(c.to_string(), cursor_style));
            } else {
                run.push(c);
            }
        }

        if !run.is_empty() {
            spans.push(Span::styled(run, text_style));
        }
        if focused && self.cursor >= self.char_count() {
            spans.push(Span::styled(" ", cursor_style));
        }
        lines.push(Line::from(spans));

        lines
    }
}

/// Renders a `TextInput` into an area
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, focused: bool) -> Self {
        Self { input, focused }
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.input.lines(self.focused)).render(area, buf);
    }
}
