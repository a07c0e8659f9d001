use crate::{
    conversation::{ConversationEntry, ConversationLog},
    server::types::{InquiryRequest, InquiryResponse, ReplyKind},
};
use std::sync::Arc;
use tracing::{debug, warn};

pub const TEXT_REPLY: &str = "This is a dummy response.";
pub const IMAGE_REPLY: &str = "Dummy image generated.";

const PLOT_TRIGGER: &str = "plot";
const ARABIC_DRAW_TRIGGER: &str = "ارسم";

/// Whether an inquiry asks for a picture.
///
/// "plot" matches in any case; the Arabic trigger only matches verbatim.
pub fn wants_image(inquiry: &str) -> bool {
    inquiry.to_lowercase().contains(PLOT_TRIGGER) || inquiry.contains(ARABIC_DRAW_TRIGGER)
}

/// Answers inquiries with canned replies, logging text exchanges.
pub struct Responder {
    log: Arc<dyn ConversationLog>,
}

impl Responder {
    pub fn new(log: Arc<dyn ConversationLog>) -> Self {
        Self { log }
    }

    pub async fn respond(&self, request: InquiryRequest) -> InquiryResponse {
        if wants_image(&request.user_inquiry) {
            debug!("Image trigger matched for user {}", request.user_id);
            // Image replies are not logged.
            return InquiryResponse {
                response: IMAGE_REPLY.to_string(),
                kind: ReplyKind::Image,
            };
        }

        let response = TEXT_REPLY.to_string();
        let entry = ConversationEntry::new(
            request.user_id,
            request.user_inquiry,
            response.clone(),
        );

        if let Err(e) = self.log.record(entry).await {
            warn!(
                "Failed to log conversation for user {}: {}",
                request.user_id, e
            );
        }

        InquiryResponse {
            response,
            kind: ReplyKind::Text,
        }
    }
}
