//! Catalogue Routes
//!
//! 国家与人物的只读路由。

use axum::{Router, routing::get};

use crate::api::app_state::AppState;
use crate::api::handlers::catalogue_handler::*;

pub fn create_catalogue_router() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/:id", get(get_country))
        .route("/figures", get(list_figures))
        .route("/figures/:id", get(get_figure))
}
