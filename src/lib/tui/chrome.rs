//! UI chrome: visibility toggles, send button styling and emoji insertion.
//!
//! None of this talks to the dispatch controller. It only reads and writes
//! the shared input control.

use super::emoji::EmojiPicker;
use super::theme;
use crate::application::InputControl;
use ratatui::style::Color;

/// Terminal width class, chosen against `ui.compact_width`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Chat is a full-screen overlay opened and closed from a launcher
    Compact,
    /// Chat is a side panel toggled by the launcher
    Wide,
}

impl LayoutMode {
    pub fn for_width(width: u16, compact_width: u16) -> Self {
        if width <= compact_width {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendButtonStyle {
    Active,
    Inactive,
}

impl SendButtonStyle {
    pub fn for_input(value: &str) -> Self {
        if value.is_empty() {
            SendButtonStyle::Inactive
        } else {
            SendButtonStyle::Active
        }
    }

    pub fn color(self) -> Color {
        match self {
            SendButtonStyle::Active => theme::SEND_ACTIVE,
            SendButtonStyle::Inactive => theme::SEND_INACTIVE,
        }
    }
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    EmojiPicker,
}

#[derive(Debug, Clone)]
pub struct ChromeState {
    layout: LayoutMode,
    chat_visible: bool,
    launcher_visible: bool,
    picker_open: bool,
    focus: Focus,
    send_button: SendButtonStyle,
    picker: EmojiPicker,
}

impl ChromeState {
    /// Compact layouts start on the launcher, wide ones with the panel open
    pub fn new(layout: LayoutMode) -> Self {
        Self {
            layout,
            chat_visible: layout == LayoutMode::Wide,
            launcher_visible: true,
            picker_open: false,
            focus: Focus::Input,
            send_button: SendButtonStyle::Inactive,
            picker: EmojiPicker::default(),
        }
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn is_chat_visible(&self) -> bool {
        self.chat_visible
    }

    pub fn is_launcher_visible(&self) -> bool {
        self.launcher_visible
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn send_button(&self) -> SendButtonStyle {
        self.send_button
    }

    pub fn picker(&self) -> &EmojiPicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut EmojiPicker {
        &mut self.picker
    }

    /// Compact: hide the launcher and show the chat
    pub fn open_chat(&mut self) {
        self.launcher_visible = false;
        self.chat_visible = true;
    }

    /// Compact: show the launcher and hide the chat
    pub fn close_chat(&mut self) {
        self.launcher_visible = true;
        self.chat_visible = false;
    }

    /// Wide: flip the panel, the launcher stays where it is
    pub fn toggle_chat(&mut self) {
        self.chat_visible = !self.chat_visible;
    }

    /// The floating launcher button
    pub fn press_launcher(&mut self) {
        match self.layout {
            LayoutMode::Compact => self.open_chat(),
            LayoutMode::Wide => self.toggle_chat(),
        }
    }

    /// The close button inside the chat header; only wired up in compact mode
    pub fn press_close(&mut self) {
        if self.layout == LayoutMode::Compact {
            self.close_chat();
        }
    }

    /// Re-bind the toggles after a resize
    pub fn set_layout(&mut self, layout: LayoutMode) {
        if layout == self.layout {
            return;
        }
        self.layout = layout;
        match layout {
            LayoutMode::Wide => self.launcher_visible = true,
            LayoutMode::Compact => self.launcher_visible = !self.chat_visible,
        }
    }

    pub fn toggle_emoji_picker(&mut self) {
        self.picker_open = !self.picker_open;
        self.focus = if self.picker_open {
            Focus::EmojiPicker
        } else {
            Focus::Input
        };
    }

    /// Move focus between the input and an open picker.
    ///
    /// Returns true when the input lost focus.
    pub fn cycle_focus(&mut self) -> bool {
        if !self.picker_open {
            return false;
        }
        self.focus = match self.focus {
            Focus::Input => Focus::EmojiPicker,
            Focus::EmojiPicker => Focus::Input,
        };
        self.focus == Focus::EmojiPicker
    }

    /// Recolour the send button from the input's current value.
    ///
    /// Called on every edit and when the input loses focus.
    pub fn refresh_send_button(&mut self, input: &InputControl) {
        self.send_button = SendButtonStyle::for_input(input.value());
    }

    /// Insert `emoji` at the input cursor and hand focus back to the input.
    ///
    /// The picker stays open so several emojis can be added in a row.
    pub fn select_emoji(&mut self, emoji: &str, input: &mut InputControl) {
        input.insert_str(emoji);
        self.focus = Focus::Input;
        self.refresh_send_button(input);
    }

    /// Insert the picker's highlighted emoji
    pub fn insert_selected_emoji(&mut self, input: &mut InputControl) {
        let emoji = self.picker.selected();
        self.select_emoji(emoji, input);
    }
}
