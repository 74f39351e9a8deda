//! Conversation view
//!
//! An ordered list of nodes: finished or in-progress messages plus transient
//! loader placeholders. Messages are only ever appended; the one mutation a
//! message sees after insertion is the reveal growing its text.

use crate::domain::types::{Role, Utterance};
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Stable identity of a node for deferred mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Message(Role),
    Loader,
}

#[derive(Debug, Clone)]
pub struct ViewNode {
    id: NodeId,
    kind: NodeKind,
    text: String,
    created_at: DateTime<Local>,
}

impl ViewNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn role(&self) -> Option<Role> {
        match self.kind {
            NodeKind::Message(role) => Some(role),
            NodeKind::Loader => None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn is_loader(&self) -> bool {
        self.kind == NodeKind::Loader
    }
}

/// Shared flag that stays `true` until the view is torn down.
///
/// Timers hold a clone and check it before every mutation.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("node {0:?} is no longer in the view")]
    NodeMissing(NodeId),
    #[error("node {0:?} is not a message")]
    NotAMessage(NodeId),
    #[error("the view has been torn down")]
    TornDown,
}

#[derive(Debug)]
pub struct ConversationView {
    nodes: Vec<ViewNode>,
    next_id: u64,
    liveness: Liveness,
}

impl Default for ConversationView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationView {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_id: 0,
            liveness: Liveness::new(),
        }
    }

    fn push(&mut self, kind: NodeKind, text: String) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(ViewNode {
            id,
            kind,
            text,
            created_at: Local::now(),
        });
        id
    }

    /// Append a message node at the end of the view
    pub fn push_message(&mut self, role: Role, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Message(role), text.into())
    }

    /// Append a loader placeholder at the end of the view
    pub fn push_loader(&mut self) -> NodeId {
        self.push(NodeKind::Loader, String::new())
    }

    /// Grow a message node by one character
    pub fn append_char(&mut self, id: NodeId, ch: char) -> Result<(), ViewError> {
        if !self.liveness.is_alive() {
            return Err(ViewError::TornDown);
        }
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(ViewError::NodeMissing(id))?;
        if node.is_loader() {
            return Err(ViewError::NotAMessage(id));
        }
        node.text.push(ch);
        Ok(())
    }

    /// Remove a node; returns whether it was still present
    pub fn remove(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        self.nodes.len() != before
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn node(&self, id: NodeId) -> Option<&ViewNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_loader(&self) -> bool {
        self.nodes.iter().any(ViewNode::is_loader)
    }

    /// Message nodes in insertion order
    pub fn messages(&self) -> impl Iterator<Item = &ViewNode> {
        self.nodes.iter().filter(|n| !n.is_loader())
    }

    /// Messages as utterances, in insertion order
    pub fn utterances(&self) -> Vec<Utterance> {
        self.messages()
            .filter_map(|n| n.role().map(|role| Utterance::new(role, n.text.clone())))
            .collect()
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        !self.liveness.is_alive()
    }

    /// Discard every node and stop all pending timers from touching the view
    pub fn teardown(&mut self) {
        self.liveness.revoke();
        self.nodes.clear();
    }
}
