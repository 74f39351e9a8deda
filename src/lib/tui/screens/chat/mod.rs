//! TUI chat screen
//!
//! - state.rs: presentation state (chrome, scroll, loader frame)
//! - ui.rs: rendering
//! - input.rs: key handling
//! - runner.rs: the draw/poll loop driving the dispatch controller

mod input;
mod runner;
mod state;
mod ui;

pub use input::{InputAction, handle_event};
pub use runner::{ChatResult, run_chat};
pub use state::ChatScreen;
