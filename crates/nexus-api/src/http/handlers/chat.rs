//! Chat endpoint.
//!
//! POST /api/chat
//!
//! Body: `{ "message": "...", "userId": "..." }` where `userId` is optional.
//! The body is parsed as JSON whatever its `Content-Type`. Bodies over the
//! configured limit are answered with 413 in the JSON error shape.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Successful chat reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// POST /api/chat: run one exchange and return the model's reply.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let body = body?;
    let request: ChatRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::Validation(e.to_string()))?;

    let reply = state
        .chat
        .handle_message(request.user_id.as_deref(), &request.message)
        .await?;

    Ok(Json(ChatResponse {
        response: reply.reply,
        user_id: reply.user_id,
    }))
}
