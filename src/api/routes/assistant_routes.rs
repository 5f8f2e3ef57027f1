//! Assistant Routes
//!
//! 依赖语言模型的路由。

use axum::{Router, routing::post};

use crate::api::app_state::AppState;
use crate::api::handlers::{
    analysis_handler::analyze_text, chat_handler::chat,
    generation_handler::generate_country_info, quiz_handler::generate_quiz_question,
};

pub fn create_assistant_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/analyze-text", post(analyze_text))
        .route("/quiz/generate-question", post(generate_quiz_question))
        .route("/generate-country-info/:name", post(generate_country_info))
}
