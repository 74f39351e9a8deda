//! Message renderer
//!
//! User messages appear in one step. Assistant messages start empty and are
//! revealed one character per `cadence` tick.

use super::context::UiContext;
use super::view::NodeId;
use crate::domain::types::Role;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// How an assistant reveal ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Every character was shown
    Completed { chars: usize },
    /// The view went away first; `shown` characters made it on screen
    Detached { shown: usize },
}

impl RevealOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RevealOutcome::Completed { .. })
    }
}

#[derive(Debug, Clone)]
pub struct MessageRenderer {
    ctx: UiContext,
    cadence: Duration,
}

impl MessageRenderer {
    pub fn new(ctx: UiContext, cadence: Duration) -> Self {
        Self { ctx, cadence }
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Append a finished user message
    pub fn render_user(&self, text: &str) -> NodeId {
        self.ctx.with(|s| s.view.push_message(Role::User, text))
    }

    /// Append an empty assistant message and type `text` into it.
    ///
    /// Resolves once the last character is shown, or as soon as the view is
    /// torn down or the node disappears.
    pub async fn render_assistant(&self, text: &str) -> RevealOutcome {
        let liveness = self.ctx.liveness();
        if !liveness.is_alive() {
            return RevealOutcome::Detached { shown: 0 };
        }
        let id = self.ctx.with(|s| s.view.push_message(Role::Assistant, ""));

        let mut shown = 0;
        for ch in text.chars() {
            sleep(self.cadence).await;
            if !liveness.is_alive() {
                debug!(shown, "View torn down during reveal");
                return RevealOutcome::Detached { shown };
            }
            if let Err(err) = self.ctx.with(|s| s.view.append_char(id, ch)) {
                debug!(%err, shown, "Reveal target gone");
                return RevealOutcome::Detached { shown };
            }
            shown += 1;
        }

        RevealOutcome::Completed { chars: shown }
    }
}
