//! Chat screen state
//!
//! Only presentation state lives here. Messages and the input control belong
//! to the shared [`UiContext`](crate::application::UiContext).

use crate::tui::chrome::{ChromeState, LayoutMode};

pub struct ChatScreen {
    /// Toggles, focus and send button colour
    pub chrome: ChromeState,
    /// Scroll offset for messages; `u16::MAX` follows the bottom
    pub scroll_offset: u16,
    /// Loader animation frame
    pub loader_frame: usize,
    /// One-line notice shown in the header
    pub status_message: Option<String>,
}

impl ChatScreen {
    pub fn new(layout: LayoutMode) -> Self {
        Self {
            chrome: ChromeState::new(layout),
            scroll_offset: u16::MAX,
            loader_frame: 0,
            status_message: None,
        }
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll messages down; reaching `max_scroll` resumes following the bottom
    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset == u16::MAX {
            return;
        }
        self.scroll_offset += 1;
        if self.scroll_offset >= max_scroll {
            self.scroll_to_bottom();
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = u16::MAX;
    }

    /// Pin a concrete offset when leaving follow mode, so scrolling up
    /// starts from what is on screen
    pub fn resolve_scroll(&mut self, max_scroll: u16) {
        if self.scroll_offset == u16::MAX {
            self.scroll_offset = max_scroll;
        }
    }

    /// Advance the loader animation
    pub fn tick(&mut self) {
        self.loader_frame = (self.loader_frame + 1) % 3;
    }
}
