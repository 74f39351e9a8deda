//! Dispatch controller
//!
//! ```text
//! Idle --submit--> Sending --request--> AwaitingReply --pacing--> Revealing --done--> Idle
//! ```
//!
//! `submit` runs the synchronous half (validate, clear input, render the user
//! message, show the loader, disable input) and spawns the rest. Any submit
//! outside `Idle` is rejected.

use super::context::UiContext;
use super::loader::{LoaderHandle, LoadingIndicator};
use super::render::{MessageRenderer, RevealOutcome};
use crate::config::TimingConfig;
use crate::infrastructure::model::ReplySource;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    Sending,
    AwaitingReply,
    Revealing,
}

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The cycle is running; the handle resolves when input is re-enabled
    Dispatched(JoinHandle<RevealOutcome>),
    /// Input was empty after trimming; nothing happened
    Empty,
    /// A previous cycle has not finished; nothing happened
    Busy,
}

impl SubmitOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, SubmitOutcome::Dispatched(_))
    }
}

#[derive(Debug, Clone, Default)]
struct SharedState(Arc<Mutex<DispatchState>>);

impl SharedState {
    fn get(&self) -> DispatchState {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, next: DispatchState) {
        let mut state = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(from = ?*state, to = ?next, "Dispatch state change");
        *state = next;
    }

    /// Move `Idle -> Sending`; false if another cycle owns the controller
    fn try_begin(&self) -> bool {
        let mut state = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        if *state != DispatchState::Idle {
            return false;
        }
        *state = DispatchState::Sending;
        true
    }
}

pub struct DispatchController<S: ReplySource + ?Sized> {
    source: Arc<S>,
    ctx: UiContext,
    renderer: MessageRenderer,
    loader: LoadingIndicator,
    pacing: Duration,
    state: SharedState,
}

impl<S> DispatchController<S>
where
    S: ReplySource + ?Sized + 'static,
{
    pub fn new(source: Arc<S>, ctx: UiContext, timing: TimingConfig) -> Self {
        Self {
            renderer: MessageRenderer::new(ctx.clone(), timing.reveal_cadence),
            loader: LoadingIndicator::new(ctx.clone(), timing.loader_dismiss, timing.loader_mode),
            source,
            ctx,
            pacing: timing.reply_pacing,
            state: SharedState::default(),
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state.get()
    }

    pub fn is_idle(&self) -> bool {
        self.state() == DispatchState::Idle
    }

    pub fn context(&self) -> &UiContext {
        &self.ctx
    }

    /// Submit whatever is in the input control
    pub fn submit(&self) -> SubmitOutcome {
        let text = self.ctx.with(|s| s.input.value().trim().to_string());
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }
        if !self.state.try_begin() {
            debug!("Submit rejected, dispatch already in progress");
            return SubmitOutcome::Busy;
        }

        self.ctx.with(|s| s.input.clear());
        self.renderer.render_user(&text);
        let loader = self.loader.show();
        self.ctx.with(|s| s.input.set_enabled(false));
        info!(chars = text.chars().count(), "Dispatching user message");

        let cycle = Cycle {
            source: self.source.clone(),
            ctx: self.ctx.clone(),
            renderer: self.renderer.clone(),
            pacing: self.pacing,
            state: self.state.clone(),
        };
        SubmitOutcome::Dispatched(tokio::spawn(cycle.run(text, loader)))
    }
}

/// Everything the spawned half of a dispatch needs
struct Cycle<S: ReplySource + ?Sized> {
    source: Arc<S>,
    ctx: UiContext,
    renderer: MessageRenderer,
    pacing: Duration,
    state: SharedState,
}

impl<S> Cycle<S>
where
    S: ReplySource + ?Sized + 'static,
{
    async fn run(self, text: String, loader: LoaderHandle) -> RevealOutcome {
        self.state.set(DispatchState::AwaitingReply);
        let reply = self.source.generate_reply(&text).await;
        loader.settle();

        sleep(self.pacing).await;

        self.state.set(DispatchState::Revealing);
        let outcome = self.renderer.render_assistant(&reply).await;

        self.ctx.with(|s| s.input.set_enabled(true));
        self.state.set(DispatchState::Idle);
        info!(?outcome, "Dispatch finished");
        outcome
    }
}
