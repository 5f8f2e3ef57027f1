use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{app_state::AppState, dto::analysis_dto::*},
    error::AppError,
};

/// 识别文本中的国家与人物，供前端高亮
pub async fn analyze_text(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    request.validate()?;
    debug!(chars = request.text.chars().count(), "Analyzing text");

    let entities = state
        .services()?
        .analysis
        .analyze(&request.text, request.country_context.as_deref())
        .await?;

    Ok(Json(AnalyzeTextResponse {
        entities,
        enhanced_text: request.text,
    }))
}
