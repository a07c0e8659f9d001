use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One non-image exchange, as handed to the conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub user_id: i64,
    pub inquiry: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl ConversationEntry {
    pub fn new(user_id: i64, inquiry: String, response: String) -> Self {
        Self {
            user_id,
            inquiry,
            response,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for ConversationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[User {}] {} → {}",
            self.user_id, self.inquiry, self.response
        )
    }
}
