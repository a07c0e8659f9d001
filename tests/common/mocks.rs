use async_trait::async_trait;
use dummy_backend::{
    Error, Result,
    conversation::{ConversationEntry, ConversationLog},
};
use std::sync::{Arc, Mutex};

/// Conversation log that keeps every entry it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingConversationLog {
    pub entries: Arc<Mutex<Vec<ConversationEntry>>>,
    pub error: Option<String>,
}

impl RecordingConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records entries but reports a failure for each of them
    pub fn failing(error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn entries(&self) -> Vec<ConversationEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConversationLog for RecordingConversationLog {
    async fn record(&self, entry: ConversationEntry) -> Result<()> {
        self.entries.lock().unwrap().push(entry);

        match self.error {
            Some(ref error) => Err(Error::internal(error.clone())),
            None => Ok(()),
        }
    }
}
