use axum::{extract::State, Json};
use serde::Deserialize;

use crate::assistant::{ChatMessage, Exchange, SUGGESTED_PROMPTS};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// GET /api/v1/assistant/greeting
pub async fn handle_greeting(State(state): State<AppState>) -> Json<ChatMessage> {
    Json(state.assistant.greeting())
}

/// GET /api/v1/assistant/suggestions
pub async fn handle_suggestions() -> Json<Vec<&'static str>> {
    Json(SUGGESTED_PROMPTS.to_vec())
}

/// POST /api/v1/assistant/messages
pub async fn handle_send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<Exchange>, AppError> {
    Ok(Json(state.assistant.respond(&req.content).await?))
}
