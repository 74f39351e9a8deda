//! Launcher, close button, layout and send button tests

use gemini_chat::application::InputControl;
use gemini_chat::tui::chrome::{ChromeState, Focus, LayoutMode, SendButtonStyle};
use gemini_chat::tui::theme;

#[test]
fn test_layout_threshold_is_inclusive() {
    assert_eq!(LayoutMode::for_width(60, 60), LayoutMode::Compact);
    assert_eq!(LayoutMode::for_width(59, 60), LayoutMode::Compact);
    assert_eq!(LayoutMode::for_width(61, 60), LayoutMode::Wide);
}

#[test]
fn test_compact_starts_on_launcher() {
    let chrome = ChromeState::new(LayoutMode::Compact);

    assert!(!chrome.is_chat_visible());
    assert!(chrome.is_launcher_visible());
}

#[test]
fn test_compact_launcher_opens_and_close_restores() {
    let mut chrome = ChromeState::new(LayoutMode::Compact);

    chrome.press_launcher();
    assert!(chrome.is_chat_visible());
    assert!(!chrome.is_launcher_visible());

    // A second press does not close it; only the close button does
    chrome.press_launcher();
    assert!(chrome.is_chat_visible());

    chrome.press_close();
    assert!(!chrome.is_chat_visible());
    assert!(chrome.is_launcher_visible());
}

#[test]
fn test_wide_launcher_toggles_panel() {
    let mut chrome = ChromeState::new(LayoutMode::Wide);
    assert!(chrome.is_chat_visible());

    chrome.press_launcher();
    assert!(!chrome.is_chat_visible());
    assert!(chrome.is_launcher_visible());

    chrome.press_launcher();
    assert!(chrome.is_chat_visible());
    assert!(chrome.is_launcher_visible());
}

#[test]
fn test_close_button_is_inert_in_wide_layout() {
    let mut chrome = ChromeState::new(LayoutMode::Wide);

    chrome.press_close();

    assert!(chrome.is_chat_visible());
}

#[test]
fn test_resize_to_wide_shows_launcher() {
    let mut chrome = ChromeState::new(LayoutMode::Compact);
    chrome.press_launcher();
    assert!(!chrome.is_launcher_visible());

    chrome.set_layout(LayoutMode::Wide);

    assert_eq!(chrome.layout(), LayoutMode::Wide);
    assert!(chrome.is_launcher_visible());
    assert!(chrome.is_chat_visible());
}

#[test]
fn test_send_button_follows_input() {
    let mut chrome = ChromeState::new(LayoutMode::Wide);
    let mut input = InputControl::new();
    assert_eq!(chrome.send_button(), SendButtonStyle::Inactive);

    input.insert_char('a');
    chrome.refresh_send_button(&input);
    assert_eq!(chrome.send_button(), SendButtonStyle::Active);
    assert_eq!(chrome.send_button().color(), theme::SEND_ACTIVE);

    input.delete_char();
    chrome.refresh_send_button(&input);
    assert_eq!(chrome.send_button(), SendButtonStyle::Inactive);
    assert_eq!(chrome.send_button().color(), theme::SEND_INACTIVE);
}

#[test]
fn test_whitespace_counts_as_content_for_send_button() {
    assert_eq!(SendButtonStyle::for_input(" "), SendButtonStyle::Active);
    assert_eq!(SendButtonStyle::for_input(""), SendButtonStyle::Inactive);
}

#[test]
fn test_cycle_focus_needs_open_picker() {
    let mut chrome = ChromeState::new(LayoutMode::Wide);

    assert!(!chrome.cycle_focus());
    assert_eq!(chrome.focus(), Focus::Input);

    chrome.toggle_emoji_picker();
    assert_eq!(chrome.focus(), Focus::EmojiPicker);

    assert!(!chrome.cycle_focus());
    assert_eq!(chrome.focus(), Focus::Input);

    assert!(chrome.cycle_focus());
    assert_eq!(chrome.focus(), Focus::EmojiPicker);
}
