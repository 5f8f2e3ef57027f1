//! 文本分析 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::HighlightedEntity;

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(length(min = 1, max = 20000))]
    pub text: String,
    /// 可选的国家上下文提示
    #[serde(default)]
    pub country_context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub entities: Vec<HighlightedEntity>,
    /// 原样返回的输入文本
    pub enhanced_text: String,
}
