pub mod input_tests;
pub mod key_tests;
pub mod scroll_tests;
