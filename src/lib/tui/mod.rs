//! Terminal user interface using Ratatui
//!
//! Hosts the chat widget: launcher, chat panel, emoji picker.

pub mod chrome;
pub mod emoji;
pub mod screens;
mod terminal;
pub mod theme;

pub use terminal::{Tui, init_terminal, install_panic_hook, restore_terminal};
