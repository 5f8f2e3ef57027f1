use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::catalogue_dto::*},
    error::AppError,
};

pub async fn list_countries(State(state): State<AppState>) -> impl IntoResponse {
    Json(CountryListResponse {
        countries: state.catalogue.list_countries(),
    })
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting country: {}", id);

    let country = state
        .catalogue
        .get_country(&id)
        .ok_or_else(|| AppError::NotFound("Country not found".to_string()))?;

    Ok(Json(country))
}

pub async fn list_figures(State(state): State<AppState>) -> impl IntoResponse {
    let figures = state
        .catalogue
        .list_figures()
        .into_iter()
        .map(FigureSummary::from)
        .collect();

    Json(FigureListResponse { figures })
}

pub async fn get_figure(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting figure: {}", id);

    let figure = state
        .catalogue
        .get_figure(&id)
        .ok_or_else(|| AppError::NotFound("Figure not found".to_string()))?;

    Ok(Json(figure))
}
