//! # Application Module
//!
//! The message dispatch and response-rendering pipeline.
//!
//! ## Submodules
//!
//! - [`view`] - Append-only conversation view and its liveness token
//! - [`input`] - The shared text input control
//! - [`context`] - `UiContext`, the injected handle to view and input
//! - [`render`] - Message renderer with the typewriter reveal
//! - [`loader`] - Loading placeholder with its own dismissal timer
//! - [`dispatch`] - The submit state machine tying everything together

pub mod context;
pub mod dispatch;
pub mod input;
pub mod loader;
pub mod render;
pub mod view;

pub use context::{Surface, UiContext};
pub use dispatch::{DispatchController, DispatchState, SubmitOutcome};
pub use input::InputControl;
pub use loader::{LoaderHandle, LoadingIndicator};
pub use render::{MessageRenderer, RevealOutcome};
pub use view::{ConversationView, Liveness, NodeId, NodeKind, ViewError, ViewNode};
