use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;
use validator::Validate;

use crate::{
    api::{app_state::AppState, dto::generation_dto::*},
    error::AppError,
};

/// 生成国家资料并写入目录，成功后广播给实时连接
pub async fn generate_country_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let param = CountryNameParam::new(&name);
    param.validate()?;

    let country = state.services()?.countries.generate(&param.name).await?;

    let delivered = state.connections.broadcast(&json!({
        "type": "country_generated",
        "country_id": country.id,
        "name": country.name,
    }));
    debug!(country_id = %country.id, delivered, "Broadcast generated country");

    Ok(Json(GenerateCountryResponse {
        status: "success",
        country,
    }))
}
