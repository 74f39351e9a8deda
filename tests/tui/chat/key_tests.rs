//! Key mapping tests for the chat screen

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use gemini_chat::application::InputControl;
use gemini_chat::tui::chrome::{Focus, LayoutMode};
use gemini_chat::tui::screens::chat::{ChatScreen, InputAction, handle_event};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn open_screen() -> ChatScreen {
    ChatScreen::new(LayoutMode::Wide)
}

#[test]
fn test_typing_edits_the_input() {
    let mut screen = open_screen();
    let mut input = InputControl::new();

    let action = handle_event(&mut screen, &mut input, key(KeyCode::Char('h')));
    handle_event(&mut screen, &mut input, key(KeyCode::Char('i')));

    assert_eq!(action, InputAction::Edited);
    assert_eq!(input.value(), "hi");
}

#[test]
fn test_enter_submits() {
    let mut screen = open_screen();
    let mut input = InputControl::new();
    input.set_value("Hello");

    let action = handle_event(&mut screen, &mut input, key(KeyCode::Enter));

    assert_eq!(action, InputAction::Submit);
    assert_eq!(input.value(), "Hello");
}

#[test]
fn test_shift_enter_inserts_newline() {
    let mut screen = open_screen();
    let mut input = InputControl::new();
    input.set_value("line one");

    let action = handle_event(
        &mut screen,
        &mut input,
        key_with(KeyCode::Enter, KeyModifiers::SHIFT),
    );

    assert_eq!(action, InputAction::Edited);
    assert_eq!(input.value(), "line one\n");
}

#[test]
fn test_disabled_input_ignores_typing_and_enter() {
    let mut screen = open_screen();
    let mut input = InputControl::new();
    input.set_enabled(false);

    assert_eq!(
        handle_event(&mut screen, &mut input, key(KeyCode::Char('x'))),
        InputAction::None
    );
    assert_eq!(
        handle_event(&mut screen, &mut input, key(KeyCode::Enter)),
        InputAction::None
    );
    assert!(input.is_empty());
}

#[test]
fn test_send_shortcut_works_while_disabled() {
    let mut screen = open_screen();
    let mut input = InputControl::new();
    input.set_enabled(false);

    let action = handle_event(
        &mut screen,
        &mut input,
        key_with(KeyCode::Char('s'), KeyModifiers::CONTROL),
    );

    assert_eq!(action, InputAction::Submit);
}

#[test]
fn test_ctrl_q_exits() {
    let mut screen = open_screen();
    let mut input = InputControl::new();

    let action = handle_event(
        &mut screen,
        &mut input,
        key_with(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );

    assert_eq!(action, InputAction::Exit);
}

#[test]
fn test_enter_on_launcher_opens_compact_chat() {
    let mut screen = ChatScreen::new(LayoutMode::Compact);
    let mut input = InputControl::new();
    assert!(!screen.chrome.is_chat_visible());

    let action = handle_event(&mut screen, &mut input, key(KeyCode::Enter));

    assert_eq!(action, InputAction::None);
    assert!(screen.chrome.is_chat_visible());
    assert!(!screen.chrome.is_launcher_visible());
}

#[test]
fn test_esc_closes_compact_chat() {
    let mut screen = ChatScreen::new(LayoutMode::Compact);
    let mut input = InputControl::new();
    screen.chrome.press_launcher();

    handle_event(&mut screen, &mut input, key(KeyCode::Esc));

    assert!(!screen.chrome.is_chat_visible());
    assert!(screen.chrome.is_launcher_visible());
}

#[test]
fn test_ctrl_e_opens_picker_and_blurs_input() {
    let mut screen = open_screen();
    let mut input = InputControl::new();

    let action = handle_event(
        &mut screen,
        &mut input,
        key_with(KeyCode::Char('e'), KeyModifiers::CONTROL),
    );

    assert_eq!(action, InputAction::Blurred);
    assert!(screen.chrome.is_picker_open());
    assert_eq!(screen.chrome.focus(), Focus::EmojiPicker);
}

#[test]
fn test_picker_enter_inserts_emoji_at_cursor() {
    let mut screen = open_screen();
    let mut input = InputControl::new();
    input.set_value("ab");
    input.move_cursor_left();
    screen.chrome.toggle_emoji_picker();

    let action = handle_event(&mut screen, &mut input, key(KeyCode::Enter));

    assert_eq!(action, InputAction::Edited);
    let emoji = screen.chrome.picker().selected();
    assert_eq!(input.value(), format!("a{}b", emoji));
    assert_eq!(screen.chrome.focus(), Focus::Input);
    assert!(screen.chrome.is_picker_open());
}

#[test]
fn test_resize_is_reported() {
    let mut screen = open_screen();
    let mut input = InputControl::new();

    let action = handle_event(&mut screen, &mut input, Event::Resize(40, 20));

    assert_eq!(action, InputAction::Resized(40));
}
