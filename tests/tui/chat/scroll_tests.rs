//! Message scrolling tests

use gemini_chat::tui::chrome::LayoutMode;
use gemini_chat::tui::screens::chat::ChatScreen;

#[test]
fn test_starts_following_bottom() {
    let screen = ChatScreen::new(LayoutMode::Wide);
    assert_eq!(screen.scroll_offset, u16::MAX);
}

#[test]
fn test_scroll_up_from_bottom_pins_offset() {
    let mut screen = ChatScreen::new(LayoutMode::Wide);

    screen.resolve_scroll(10);
    screen.scroll_up();

    assert_eq!(screen.scroll_offset, 9);
}

#[test]
fn test_scroll_down_to_end_resumes_following() {
    let mut screen = ChatScreen::new(LayoutMode::Wide);
    screen.scroll_offset = 8;

    screen.scroll_down(10);
    assert_eq!(screen.scroll_offset, 9);

    screen.scroll_down(10);
    assert_eq!(screen.scroll_offset, u16::MAX);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let mut screen = ChatScreen::new(LayoutMode::Wide);

    screen.scroll_to_top();
    assert_eq!(screen.scroll_offset, 0);

    screen.scroll_up();
    assert_eq!(screen.scroll_offset, 0);

    screen.scroll_to_bottom();
    assert_eq!(screen.scroll_offset, u16::MAX);
}

#[test]
fn test_loader_frames_cycle() {
    let mut screen = ChatScreen::new(LayoutMode::Wide);

    screen.tick();
    screen.tick();
    screen.tick();

    assert_eq!(screen.loader_frame, 0);
}
