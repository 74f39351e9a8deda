//! TUI screens

pub mod chat;

pub use chat::{ChatResult, run_chat};
