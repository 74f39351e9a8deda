pub mod emoji_tests;
pub mod toggle_tests;
