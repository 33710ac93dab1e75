//! File path input widget
//!
//! Single-line input with a character-indexed cursor. Pasted or dropped
//! paths are normalized: surrounding quotes, a `file://` prefix and
//! trailing whitespace are removed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Editable path field
#[derive(Debug, Clone, Default)]
pub struct PathInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    pub placeholder: String,
}

impl PathInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Default::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.content.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.content.chars().count());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Screen column of the cursor, if it falls inside `area`
    fn cursor_column(&self, area: Rect) -> Option<u16> {
        let offset = u16::try_from(self.cursor).ok()?;
        let x = area.x.checked_add(offset)?;
        (offset < area.width).then_some(x)
    }

    /// Replace the content with a pasted path
    pub fn set_pasted(&mut self, text: &str) {
        self.content = normalize_pasted_path(text);
        self.move_end();
    }
}

/// Clean up a path as terminals deliver it on paste or drop
pub fn normalize_pasted_path(text: &str) -> String {
    let trimmed = text.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(trimmed);
    let path = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    path.replace("\\ ", " ")
}

impl Widget for &PathInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.content.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                &self.placeholder,
                Style::default().fg(Color::DarkGray),
            );
        } else {
            buf.set_string(area.x, area.y, &self.content, Style::default().fg(Color::White));
        }

        if let Some(cursor_x) = self.cursor_column(area) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_multibyte() {
        let mut input = PathInput::default();
        for c in "café.csv".chars() {
            input.insert(c);
        }
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "caf.csv");
    }

    #[test]
    fn test_cursor_past_area_is_not_drawn() {
        let mut input = PathInput::default();
        input.set_pasted(&format!("/{}.csv", "a".repeat(70_000)));

        let area = Rect::new(2, 0, 40, 1);
        assert_eq!(input.cursor_column(area), None);

        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        input.move_start();
        assert_eq!(input.cursor_column(area), Some(2));
    }

    #[test]
    fn test_normalize_pasted_path() {
        assert_eq!(normalize_pasted_path("'/tmp/a b.csv'\n"), "/tmp/a b.csv");
        assert_eq!(normalize_pasted_path("file:///tmp/a.csv"), "/tmp/a.csv");
        assert_eq!(normalize_pasted_path("/tmp/a\\ b.csv"), "/tmp/a b.csv");
    }
}
