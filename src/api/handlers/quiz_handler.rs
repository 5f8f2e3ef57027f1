use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{api::app_state::AppState, error::AppError};

pub async fn generate_quiz_question(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let services = state.services()?;
    debug!(
        countries = state.catalogue.country_count(),
        "Generating quiz question"
    );

    let question = services.quiz.generate_question().await?;
    Ok(Json(question))
}
