//! Emoji picker

/// Emojis offered by the picker, laid out row by row
pub const EMOJIS: &[&str] = &[
    "😀", "😂", "😊", "😍", "😉", "🤔", "😎", "😢", "😡", "😴", //
    "👍", "👎", "👏", "🙏", "👋", "💪", "🤝", "✌️", "👀", "🙌", //
    "❤️", "🔥", "✨", "🎉", "🚀", "💡", "✅", "❌", "⭐", "☕",
];

/// Grid cursor over [`EMOJIS`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPicker {
    selected: usize,
    columns: usize,
}

impl Default for EmojiPicker {
    fn default() -> Self {
        Self::new(10)
    }
}

impl EmojiPicker {
    pub fn new(columns: usize) -> Self {
        Self {
            selected: 0,
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &'static str {
        EMOJIS[self.selected]
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.selected + 1 < EMOJIS.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.columns);
    }

    pub fn move_down(&mut self) {
        if self.selected + self.columns < EMOJIS.len() {
            self.selected += self.columns;
        }
    }

    /// Rows of the grid, for rendering
    pub fn rows(&self) -> impl Iterator<Item = &'static [&'static str]> {
        EMOJIS.chunks(self.columns)
    }
}
