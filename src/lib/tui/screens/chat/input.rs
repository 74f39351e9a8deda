//! Chat input handling

use super::state::ChatScreen;
use crate::application::InputControl;
use crate::tui::chrome::Focus;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Exit the chat
    Exit,
    /// Input text changed
    Edited,
    /// Input lost focus
    Blurred,
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
    /// Terminal was resized to this width
    Resized(u16),
}

/// Handle one terminal event, updating chrome and input in place
pub fn handle_event(screen: &mut ChatScreen, input: &mut InputControl, event: Event) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(screen, input, key),
        Event::Resize(width, _) => InputAction::Resized(width),
        _ => InputAction::None,
    }
}

fn handle_key(screen: &mut ChatScreen, input: &mut InputControl, key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        return InputAction::Exit;
    }
    if ctrl && key.code == KeyCode::Char('o') {
        screen.chrome.press_launcher();
        return InputAction::None;
    }

    if !screen.chrome.is_chat_visible() {
        return match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o') => {
                screen.chrome.press_launcher();
                InputAction::None
            }
            KeyCode::Char('q') | KeyCode::Esc => InputAction::Exit,
            _ => InputAction::None,
        };
    }

    if ctrl && key.code == KeyCode::Char('e') {
        let had_focus = screen.chrome.focus() == Focus::Input;
        screen.chrome.toggle_emoji_picker();
        return if had_focus && screen.chrome.focus() != Focus::Input {
            InputAction::Blurred
        } else {
            InputAction::None
        };
    }
    // Send button: works even while the input is disabled
    if ctrl && key.code == KeyCode::Char('s') {
        return InputAction::Submit;
    }
    if key.code == KeyCode::Tab && screen.chrome.is_picker_open() {
        return if screen.chrome.cycle_focus() {
            InputAction::Blurred
        } else {
            InputAction::None
        };
    }
    if key.code == KeyCode::Esc {
        if screen.chrome.is_picker_open() {
            screen.chrome.toggle_emoji_picker();
        } else {
            screen.chrome.press_close();
        }
        return InputAction::None;
    }

    match screen.chrome.focus() {
        Focus::EmojiPicker => handle_picker_key(screen, input, key),
        Focus::Input => handle_input_key(input, key),
    }
}

fn handle_picker_key(screen: &mut ChatScreen, input: &mut InputControl, key: KeyEvent) -> InputAction {
    let picker = screen.chrome.picker_mut();
    match key.code {
        KeyCode::Left => picker.move_left(),
        KeyCode::Right => picker.move_right(),
        KeyCode::Up => picker.move_up(),
        KeyCode::Down => picker.move_down(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            screen.chrome.insert_selected_emoji(input);
            return InputAction::Edited;
        }
        _ => {}
    }
    InputAction::None
}

fn handle_input_key(input: &mut InputControl, key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let newline = key
        .modifiers
        .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);

    match key.code {
        KeyCode::Up | KeyCode::PageUp => return InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => return InputAction::ScrollDown,
        KeyCode::Char('u') if ctrl => return InputAction::ScrollTop,
        KeyCode::Char('d') if ctrl => return InputAction::ScrollBottom,
        _ => {}
    }

    // A disabled input swallows every keystroke
    if !input.is_enabled() {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter if newline => {
            input.insert_char('\n');
            InputAction::Edited
        }
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Backspace => {
            input.delete_char();
            InputAction::Edited
        }
        KeyCode::Delete => {
            input.delete_char_forward();
            InputAction::Edited
        }
        KeyCode::Left => {
            input.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            input.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            input.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            input.move_cursor_end();
            InputAction::None
        }
        KeyCode::Char(c) if !ctrl => {
            input.insert_char(c);
            InputAction::Edited
        }
        _ => InputAction::None,
    }
}
