//! Text input widget
//!
//! A single-line text input field with cursor support. The cursor counts
//! characters, not bytes, so symbols like `₹` edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the character at `cursor`
    fn byte_index(&self, cursor: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
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
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        };

        let input_start = area.x + label_width as u16;

        if !self.label.is_empty() {
            let label_style = if self.focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let label_line = Line::from(vec![
                Span::styled(&self.label, label_style),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let show_placeholder = self.content.is_empty() && !self.focused;
        let (display_text, text_style) = if show_placeholder {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (self.content.as_str(), Style::default().fg(Color::White))
        } else {
            (self.content.as_str(), Style::default().fg(Color::Yellow))
        };

        let max_width = area.width.saturating_sub(label_width as u16) as usize;
        buf.set_stringn(input_start, area.y, display_text, max_width, text_style);

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "12.5".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12.5");

        input.backspace();
        assert_eq!(input.value(), "12.");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().content("₹10");
        assert_eq!(input.cursor, 3);

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "10");

        input.insert('€');
        input.move_end();
        input.insert('0');
        assert_eq!(input.value(), "€100");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);

        input.move_start();
        input.move_left();
        input.backspace();
        assert_eq!(input.cursor, 0);
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("food");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_render_shows_label_and_placeholder() {
        let input = TextInput::new().label("Date").placeholder("YYYY-MM-DD");
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        input.render(area, &mut buf);

        let line: String = (0..30)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(line.starts_with("Date: YYYY-MM-DD"));
    }
}
