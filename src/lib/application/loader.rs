//! Loading indicator
//!
//! In [`LoaderMode::Timed`] the placeholder removes itself after a fixed
//! delay and knows nothing about the request. In [`LoaderMode::UntilReply`]
//! a task waits for the reply to settle and removes it then.

use super::context::UiContext;
use super::view::NodeId;
use crate::config::LoaderMode;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    ctx: UiContext,
    dismiss_after: Duration,
    mode: LoaderMode,
}

/// A shown loader.
///
/// Dropping the handle of an `UntilReply` loader counts as settlement.
#[derive(Debug)]
pub struct LoaderHandle {
    id: NodeId,
    settle_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl LoadingIndicator {
    pub fn new(ctx: UiContext, dismiss_after: Duration, mode: LoaderMode) -> Self {
        Self {
            ctx,
            dismiss_after,
            mode,
        }
    }

    pub fn mode(&self) -> LoaderMode {
        self.mode
    }

    /// Insert the placeholder now and schedule its removal
    pub fn show(&self) -> LoaderHandle {
        let (id, liveness) = self.ctx.with(|s| (s.view.push_loader(), s.view.liveness()));
        let ctx = self.ctx.clone();

        let (settle_tx, task) = match self.mode {
            LoaderMode::Timed => {
                let delay = self.dismiss_after;
                let task = tokio::spawn(async move {
                    sleep(delay).await;
                    if liveness.is_alive() {
                        let removed = ctx.with(|s| s.view.remove(id));
                        debug!(removed, "Loader timer elapsed");
                    }
                });
                (None, task)
            }
            LoaderMode::UntilReply => {
                let (tx, rx) = oneshot::channel::<()>();
                let task = tokio::spawn(async move {
                    let _ = rx.await;
                    if liveness.is_alive() {
                        ctx.with(|s| s.view.remove(id));
                        debug!("Loader dismissed on reply");
                    }
                });
                (Some(tx), task)
            }
        };

        LoaderHandle {
            id,
            settle_tx,
            task,
        }
    }
}

impl LoaderHandle {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tell the loader the reply has arrived. Timed loaders ignore this.
    pub fn settle(mut self) {
        if let Some(tx) = self.settle_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Whether the removal task has run to the end
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
