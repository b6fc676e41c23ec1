//! Axum route handler for the chat endpoint.

use axum::{extract::State, Json};
use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::{ChatRequest, Message};
use crate::state::AppState;

/// POST /api/chat
///
/// The body is parsed as JSON whatever its declared Content-Type. Any parse
/// failure, a missing `messages` array, or a final entry without string
/// `content` becomes a 500 `{ error }`. Earlier entries are never inspected.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Message>, AppError> {
    let request: ChatRequest = serde_json::from_slice(&body)?;

    let latest = request.latest_content().ok_or(AppError::MissingContent)?;

    info!(messages = request.messages.len(), "Received chat request");
    debug!(last_message = %latest, "Last message");

    Ok(Json(state.responder.reply(latest)))
}
