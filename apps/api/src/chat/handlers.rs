use axum::Json;
use serde::{Deserialize, Serialize};

use crate::chat::{quick_replies, respond};
use crate::extract::ApiJson;

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub reply: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QuickRepliesResponse {
    pub quick_replies: &'static [&'static str],
}

/// POST /api/v1/chat/respond
///
/// Stateless lookup with no delay. Session chat goes through the wizard.
pub async fn handle_respond(ApiJson(request): ApiJson<RespondRequest>) -> Json<RespondResponse> {
    Json(RespondResponse {
        reply: respond(&request.text),
    })
}

/// GET /api/v1/chat/quick-replies
pub async fn handle_quick_replies() -> Json<QuickRepliesResponse> {
    Json(QuickRepliesResponse {
        quick_replies: quick_replies(),
    })
}
