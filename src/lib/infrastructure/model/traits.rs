//! Model traits

use async_trait::async_trait;

/// Something that turns one user utterance into reply text.
///
/// Implementations never fail: any transport problem is reported as a
/// fallback sentence instead of an error.
#[async_trait]
pub trait ReplySource: Send + Sync {
    async fn generate_reply(&self, user_text: &str) -> String;
}
