//! TUI Theme
//!
//! Dark palette with a blue accent. The send button is blue when there is
//! something to send and grey otherwise.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Secondary accent - warm amber for highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Send button with text in the input
pub const SEND_ACTIVE: Color = Color::Rgb(24, 73, 214);

/// Send button with an empty input
pub const SEND_INACTIVE: Color = Color::Rgb(173, 168, 168);

/// User bubble background
pub const USER_BUBBLE: Color = Color::Rgb(24, 73, 214);

/// Assistant bubble background
pub const BOT_BUBBLE: Color = Color::Rgb(45, 48, 58);

/// Header/title style
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Loading indicator style
pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// User message bubble
pub fn user_bubble() -> Style {
    Style::default().fg(Color::White).bg(USER_BUBBLE)
}

/// Assistant message bubble
pub fn bot_bubble() -> Style {
    Style::default().fg(Color::White).bg(BOT_BUBBLE)
}

/// Timestamp next to a bubble
pub fn timestamp() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

/// Disabled input text
pub fn disabled() -> Style {
    Style::default().fg(MUTED)
}

/// Selected cell in the emoji picker
pub fn selected() -> Style {
    Style::default()
        .bg(Color::Rgb(50, 60, 80))
        .add_modifier(Modifier::BOLD)
}

/// Floating launcher button
pub fn launcher() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(ACCENT)
}
