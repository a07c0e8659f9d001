use super::{
    extract::JsonBody,
    types::{InquiryRequest, InquiryResponse},
};
use crate::responder::Responder;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
}

pub async fn send_request(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<InquiryRequest>,
) -> Json<InquiryResponse> {
    info!("Received inquiry from user {}", request.user_id);

    let response = state.responder.respond(request).await;
    Json(response)
}
