mod sink;
mod types;

pub use sink::{ConversationLog, TracingConversationLog};
pub use types::ConversationEntry;

#[cfg(test)]
pub use sink::MockConversationLog;
