//! 对话 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{ChatContext, ChatExchange};

/// 对话请求
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
    /// 当前浏览的国家/事件
    #[serde(default)]
    pub context: Option<ChatContext>,
    /// 历史对话，仅使用最近 5 条
    #[serde(default)]
    #[validate(nested)]
    pub history: Vec<ChatExchange>,
}

/// 对话响应
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    /// RFC 3339
    pub timestamp: String,
}
