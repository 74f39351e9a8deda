//! TUI unit tests module
//!
//! Organized by domain:
//! - chat/: input control, key mapping, scroll tests
//! - chrome/: visibility toggles, send button and emoji tests

pub mod chat;
pub mod chrome;
