//! Input control editing tests

use gemini_chat::application::InputControl;

#[test]
fn test_insert_char() {
    let mut input = InputControl::new();

    input.insert_char('H');
    input.insert_char('i');

    assert_eq!(input.value(), "Hi");
    assert_eq!(input.cursor_pos(), 2);
}

#[test]
fn test_delete_char() {
    let mut input = InputControl::new();
    input.set_value("Hello");

    input.delete_char();

    assert_eq!(input.value(), "Hell");
    assert_eq!(input.cursor_pos(), 4);
}

#[test]
fn test_delete_char_at_start() {
    let mut input = InputControl::new();
    input.set_value("Hello");
    input.move_cursor_home();

    input.delete_char();

    assert_eq!(input.value(), "Hello");
    assert_eq!(input.cursor_pos(), 0);
}

#[test]
fn test_delete_char_forward() {
    let mut input = InputControl::new();
    input.set_value("Hello");
    input.move_cursor_home();

    input.delete_char_forward();

    assert_eq!(input.value(), "ello");
    assert_eq!(input.cursor_pos(), 0);
}

#[test]
fn test_cursor_movement_is_bounded() {
    let mut input = InputControl::new();
    input.set_value("ab");

    input.move_cursor_right();
    assert_eq!(input.cursor_pos(), 2);

    input.move_cursor_left();
    input.move_cursor_left();
    input.move_cursor_left();
    assert_eq!(input.cursor_pos(), 0);

    input.move_cursor_end();
    assert_eq!(input.cursor_pos(), 2);
}

#[test]
fn test_insert_in_the_middle_of_multibyte_text() {
    let mut input = InputControl::new();
    input.set_value("héllo");
    input.move_cursor_home();
    input.move_cursor_right();
    input.move_cursor_right();

    input.insert_char('X');

    assert_eq!(input.value(), "héXllo");
    assert_eq!(input.cursor_pos(), 3);
}

#[test]
fn test_take_clears_value_and_cursor() {
    let mut input = InputControl::new();
    input.set_value("Hello");

    assert_eq!(input.take(), "Hello");
    assert!(input.is_empty());
    assert_eq!(input.cursor_pos(), 0);
}

#[test]
fn test_starts_enabled() {
    let mut input = InputControl::new();
    assert!(input.is_enabled());

    input.set_enabled(false);
    assert!(!input.is_enabled());
}
