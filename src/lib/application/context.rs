//! UI context
//!
//! The conversation view and the input control live behind one lock so the
//! chat screen and the dispatch tasks see a consistent pair. The lock is only
//! held for the duration of a closure and never across an `.await`.

use super::input::InputControl;
use super::view::{ConversationView, Liveness, ViewNode};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct Surface {
    pub view: ConversationView,
    pub input: InputControl,
}

/// Cheaply clonable handle to the shared [`Surface`]
#[derive(Debug, Clone, Default)]
pub struct UiContext {
    inner: Arc<Mutex<Surface>>,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the surface
    pub fn with<R>(&self, f: impl FnOnce(&mut Surface) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn liveness(&self) -> Liveness {
        self.with(|s| s.view.liveness())
    }

    pub fn input_value(&self) -> String {
        self.with(|s| s.input.value().to_string())
    }

    pub fn set_input(&self, value: impl Into<String>) {
        let value = value.into();
        self.with(|s| s.input.set_value(value));
    }

    pub fn input_enabled(&self) -> bool {
        self.with(|s| s.input.is_enabled())
    }

    /// Copy of the current nodes, for assertions and one-off reads
    pub fn snapshot(&self) -> Vec<ViewNode> {
        self.with(|s| s.view.nodes().to_vec())
    }

    pub fn teardown(&self) {
        self.with(|s| s.view.teardown());
    }
}
