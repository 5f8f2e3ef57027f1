//! API 模块
//!
//! 提供 REST API 与 WebSocket 入口。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::app_state::AppState;
use crate::observability::{health_check, service_info};
use crate::websocket::ws_handler;

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::catalogue_routes::create_catalogue_router())
        .merge(routes::assistant_routes::create_assistant_router());

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/ws", get(ws_handler))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
