//! Axum route handlers for the chat widget.

use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::chat::service::ChatReply;
use crate::errors::AppError;
use crate::models::profile::FactBase;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

/// POST /api/v1/chat
///
/// Answers one visitor message. Pass the returned `session_id` back to keep
/// conversation context for the remote model.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let reply = state.chat.answer(request.session_id, &request.message).await?;
    Ok(Json(reply))
}

/// GET /api/v1/profile
pub async fn handle_profile(State(state): State<AppState>) -> Json<FactBase> {
    Json(state.facts.as_ref().clone())
}
