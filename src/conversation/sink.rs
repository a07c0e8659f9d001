use super::ConversationEntry;
use crate::Result;
use async_trait::async_trait;
use tracing::info;

/// Sink for non-image exchanges. Callers never inspect what it does with them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationLog: Send + Sync {
    async fn record(&self, entry: ConversationEntry) -> Result<()>;
}

/// Writes each exchange as a structured `info` event on the `conversation` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConversationLog;

impl TracingConversationLog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConversationLog for TracingConversationLog {
    async fn record(&self, entry: ConversationEntry) -> Result<()> {
        info!(
            target: "conversation",
            user_id = entry.user_id,
            inquiry = %entry.inquiry,
            response = %entry.response,
            created_at = %entry.created_at.to_rfc3339(),
            "Saved conversation: {}",
            entry
        );
        Ok(())
    }
}
