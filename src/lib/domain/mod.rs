pub mod types;

pub use types::{Role, Utterance};
