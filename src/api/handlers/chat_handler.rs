use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
};

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    request.validate()?;
    debug!(
        chars = request.message.chars().count(),
        history = request.history.len(),
        "Chat request"
    );

    let reply = state
        .services()?
        .chat
        .reply(&request.message, request.context.as_ref(), &request.history)
        .await?;

    Ok(Json(ChatResponse {
        response: reply.response,
        timestamp: reply.timestamp.to_rfc3339(),
    }))
}
