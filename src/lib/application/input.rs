//! The shared text input control
//!
//! Cursor positions are counted in characters, not bytes.

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[derive(Debug, Clone)]
pub struct InputControl {
    value: String,
    cursor_pos: usize,
    enabled: bool,
}

impl Default for InputControl {
    fn default() -> Self {
        Self::new()
    }
}

impl InputControl {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor_pos: 0,
            enabled: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Replace the whole value and put the cursor at the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_pos = self.char_len();
    }

    /// Get the current value and clear it
    pub fn take(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.value)
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = char_to_byte_index(&self.value, self.cursor_pos);
        self.value.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Insert text at the cursor and leave the cursor right after it
    pub fn insert_str(&mut self, text: &str) {
        let at = char_to_byte_index(&self.value, self.cursor_pos);
        self.value.insert_str(at, text);
        self.cursor_pos += text.chars().count();
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let at = char_to_byte_index(&self.value, self.cursor_pos - 1);
            self.value.remove(at);
            self.cursor_pos -= 1;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.char_len() {
            let at = char_to_byte_index(&self.value, self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}
