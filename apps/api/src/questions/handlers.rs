//! Axum route handlers for the conversation intake endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::conversation::ConversationMessage;
use crate::questions::contract::QuestionGenerationResult;
use crate::state::AppState;

/// Request body for POST /conversation.
#[derive(Debug, Deserialize)]
pub struct ConversationRequest {
    pub messages: Vec<ConversationMessage>,
}

/// Response body. Always `status: "OK"` — the generator is total, so a
/// caller cannot distinguish a fallback from a genuine result here.
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub status: String,
    pub message_count: usize,
    pub questions: QuestionGenerationResult,
}

/// POST /conversation
///
/// Receives an interview transcript and returns follow-up questions, real
/// or fallback. Malformed bodies (including unknown speaker values) are
/// rejected by the Json extractor before this handler runs.
pub async fn handle_conversation(
    State(state): State<AppState>,
    Json(request): Json<ConversationRequest>,
) -> Json<ConversationResponse> {
    info!(
        "Received conversation with {} messages",
        request.messages.len()
    );
    for (i, msg) in request.messages.iter().enumerate() {
        debug!("{}. {}: {}", i + 1, msg.speaker.display_label(), msg.content);
    }

    let questions = state.generator.generate_questions(&request.messages).await;

    Json(ConversationResponse {
        status: "OK".to_string(),
        message_count: request.messages.len(),
        questions,
    })
}
