//! Input field handling for the terminal user interface.

/// A single-line text input with a character-indexed cursor.
///
/// The cursor counts characters, not bytes, so multibyte input behaves.
#[derive(Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        InputField::default()
    }

    /// Byte offset of the cursor within the value.
    fn byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_offset();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset();
            self.value.remove(at);
        }
    }

    /// Move the cursor one position left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one position right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Clear the value and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_at_cursor() {
        let mut field = InputField::new();
        for c in "deck".chars() {
            field.handle_char(c);
        }
        assert_eq!(field.value, "deck");

        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_char('s');
        assert_eq!(field.value, "desck");

        field.handle_backspace();
        assert_eq!(field.value, "deck");
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn test_multibyte_input_keeps_cursor_consistent() {
        let mut field = InputField::new();
        for c in "café".chars() {
            field.handle_char(c);
        }
        assert_eq!(field.value, "café");
        field.handle_backspace();
        assert_eq!(field.value, "caf");
        field.handle_char('é');
        field.move_cursor_left();
        field.handle_delete();
        assert_eq!(field.value, "caf");
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let mut field = InputField::new();
        field.move_cursor_left();
        field.handle_backspace();
        assert_eq!(field.cursor, 0);
        field.handle_char('x');
        field.move_cursor_right();
        assert_eq!(field.cursor, 1);
    }
}
