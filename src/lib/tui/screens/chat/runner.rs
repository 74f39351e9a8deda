//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_event};
use super::state::ChatScreen;
use super::ui::ChatUI;
use crate::application::{DispatchController, SubmitOutcome, UiContext};
use crate::config::UiConfig;
use crate::domain::Utterance;
use crate::infrastructure::model::ReplySource;
use crate::tui::chrome::LayoutMode;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(30);
const LOADER_TICK: Duration = Duration::from_millis(300);

/// Result of a chat session
#[derive(Debug)]
pub struct ChatResult {
    /// Messages on screen when the user left
    pub transcript: Vec<Utterance>,
}

/// Run the TUI chat interface until the user exits
pub async fn run_chat<S>(
    controller: DispatchController<S>,
    ui: UiConfig,
    model: &str,
) -> Result<ChatResult, Box<dyn Error>>
where
    S: ReplySource + ?Sized + 'static,
{
    let mut terminal = init_terminal()?;
    let width = terminal.size()?.width;
    let mut screen = ChatScreen::new(LayoutMode::for_width(width, ui.compact_width));
    info!(width, layout = ?screen.chrome.layout(), "Chat screen opened");

    let result = run_chat_loop(&mut terminal, &mut screen, &controller, &ui, model);

    let ctx = controller.context();
    let transcript = ctx.with(|s| s.view.utterances());
    // Anything still revealing must stop touching the view
    ctx.teardown();
    restore_terminal()?;
    result?;

    Ok(ChatResult { transcript })
}

fn run_chat_loop<S>(
    terminal: &mut Tui,
    screen: &mut ChatScreen,
    controller: &DispatchController<S>,
    ui: &UiConfig,
    model: &str,
) -> Result<(), Box<dyn Error>>
where
    S: ReplySource + ?Sized + 'static,
{
    let ctx: &UiContext = controller.context();
    let mut last_tick = Instant::now();

    loop {
        let mut max_scroll = 0;
        ctx.with(|surface| {
            terminal.draw(|frame| {
                max_scroll = ChatUI::render(frame, surface, screen, model);
            })
        })?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            let action = ctx.with(|surface| handle_event(screen, &mut surface.input, event));

            match action {
                InputAction::Exit => return Ok(()),

                InputAction::Submit => {
                    screen.status_message = None;
                    // The lock must be free here: submit takes it itself
                    match controller.submit() {
                        SubmitOutcome::Dispatched(_) => screen.scroll_to_bottom(),
                        SubmitOutcome::Empty => {}
                        SubmitOutcome::Busy => {
                            screen.status_message = Some("Still replying...".into());
                        }
                    }
                    ctx.with(|surface| screen.chrome.refresh_send_button(&surface.input));
                }

                InputAction::Edited | InputAction::Blurred => {
                    ctx.with(|surface| screen.chrome.refresh_send_button(&surface.input));
                }

                InputAction::ScrollUp => {
                    screen.resolve_scroll(max_scroll);
                    screen.scroll_up();
                }

                InputAction::ScrollDown => screen.scroll_down(max_scroll),

                InputAction::ScrollTop => screen.scroll_to_top(),

                InputAction::ScrollBottom => screen.scroll_to_bottom(),

                InputAction::Resized(width) => {
                    let layout = LayoutMode::for_width(width, ui.compact_width);
                    debug!(width, ?layout, "Terminal resized");
                    screen.chrome.set_layout(layout);
                }

                InputAction::None => {}
            }
        }

        if last_tick.elapsed() >= LOADER_TICK {
            screen.tick();
            last_tick = Instant::now();
        }
    }
}
