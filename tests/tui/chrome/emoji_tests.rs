//! Emoji picker tests

use gemini_chat::application::InputControl;
use gemini_chat::tui::chrome::{ChromeState, Focus, LayoutMode, SendButtonStyle};
use gemini_chat::tui::emoji::{EMOJIS, EmojiPicker};

#[test]
fn test_picker_grid_navigation() {
    let mut picker = EmojiPicker::new(10);
    assert_eq!(picker.selected(), EMOJIS[0]);

    picker.move_left();
    assert_eq!(picker.selected_index(), 0);

    picker.move_right();
    picker.move_down();
    assert_eq!(picker.selected_index(), 11);

    picker.move_up();
    assert_eq!(picker.selected_index(), 1);
}

#[test]
fn test_picker_stays_inside_grid() {
    let mut picker = EmojiPicker::new(10);
    for _ in 0..EMOJIS.len() + 5 {
        picker.move_right();
    }
    assert_eq!(picker.selected_index(), EMOJIS.len() - 1);

    picker.move_down();
    assert_eq!(picker.selected_index(), EMOJIS.len() - 1);
}

#[test]
fn test_rows_cover_every_emoji() {
    let picker = EmojiPicker::new(7);
    let total: usize = picker.rows().map(<[&str]>::len).sum();

    assert_eq!(total, EMOJIS.len());
    assert!(picker.rows().all(|row| row.len() <= 7));
}

#[test]
fn test_select_emoji_inserts_at_cursor() {
    let mut chrome = ChromeState::new(LayoutMode::Wide);
    let mut input = InputControl::new();
    input.set_value("Hello world");
    for _ in 0..6 {
        input.move_cursor_left();
    }
    chrome.toggle_emoji_picker();

    chrome.select_emoji("👋", &mut input);

    assert_eq!(input.value(), "Hello👋 world");
    assert_eq!(input.cursor_pos(), 6);
    assert_eq!(chrome.focus(), Focus::Input);
    assert!(chrome.is_picker_open());
    assert_eq!(chrome.send_button(), SendButtonStyle::Active);
}

#[test]
fn test_several_emojis_in_a_row() {
    let mut chrome = ChromeState::new(LayoutMode::Wide);
    let mut input = InputControl::new();

    chrome.select_emoji("🔥", &mut input);
    chrome.select_emoji("🚀", &mut input);

    assert_eq!(input.value(), "🔥🚀");
    assert_eq!(input.cursor_pos(), 2);
}

#[test]
fn test_insert_selected_emoji_uses_picker_selection() {
    let mut chrome = ChromeState::new(LayoutMode::Wide);
    let mut input = InputControl::new();
    chrome.toggle_emoji_picker();
    chrome.picker_mut().move_right();

    chrome.insert_selected_emoji(&mut input);

    assert_eq!(input.value(), EMOJIS[1]);
}
