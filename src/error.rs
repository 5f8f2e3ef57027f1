//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 资源不存在
    #[error("{0}")]
    NotFound(String),

    /// 参数验证错误
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 模型服务超时
    #[error("AI service timeout: {0}")]
    UpstreamTimeout(String),

    /// 模型服务配额耗尽
    #[error("{0}")]
    QuotaExceeded(String),

    /// 模型服务返回非成功状态
    #[error("AI Error: {0}")]
    Upstream(String),

    /// 模型输出无法解析
    #[error("Failed to parse AI response: {0}")]
    Parse(String),

    /// 服务不可用（缺少凭据）
    #[error("{0}")]
    ServiceUnavailable(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = (&self).into();
        let request_id = uuid::Uuid::new_v4().to_string();
        if status >= 500 {
            tracing::error!(request_id = %request_id, code = %code, "{}", self.log_message());
        }
        let mut error = ErrorResponse::new(&code, &self.to_string());
        error.request_id = Some(request_id);
        let body = Json(error);
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
    /// 详细信息
    pub details: Option<String>,
    /// 请求 ID
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::NotFound(_) => (404, "NOT_FOUND".to_string()),
            AppError::Validation(_) => (400, "BAD_REQUEST".to_string()),
            AppError::ServiceUnavailable(_) => (503, "SERVICE_UNAVAILABLE".to_string()),
            AppError::QuotaExceeded(_) => (429, "QUOTA_EXCEEDED".to_string()),
            AppError::UpstreamTimeout(_) => (504, "UPSTREAM_TIMEOUT".to_string()),
            AppError::Upstream(_) => (502, "UPSTREAM_ERROR".to_string()),
            AppError::Parse(_) => (502, "PARSE_ERROR".to_string()),
            _ => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// Longest error message written to the server log.
const LOGGED_MESSAGE_CHARS: usize = 300;

impl AppError {
    /// Message for the server log; upstream bodies can be arbitrarily long.
    pub fn log_message(&self) -> String {
        truncate_for_log(&self.to_string(), LOGGED_MESSAGE_CHARS)
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

/// Cut `text` to at most `max_chars` characters, appending an ellipsis when shortened.
pub fn truncate_for_log(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::NotFound("Country not found".into()), 404),
            (AppError::Validation("bad".into()), 400),
            (AppError::ServiceUnavailable("no key".into()), 503),
            (AppError::QuotaExceeded("quota".into()), 429),
            (AppError::UpstreamTimeout("slow".into()), 504),
            (AppError::Upstream("boom".into()), 502),
            (AppError::Parse("garbage".into()), 502),
            (AppError::Internal("oops".into()), 500),
        ];

        for (err, expected) in cases {
            let (status, _code): (u16, String) = (&err).into();
            assert_eq!(status, expected, "unexpected status for {err:?}");
        }
    }

    #[test]
    fn test_not_found_message_is_verbatim() {
        let err = AppError::NotFound("Country not found".into());
        assert_eq!(err.to_string(), "Country not found");
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short", 10), "short");
        assert_eq!(truncate_for_log("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_for_log("ééééé", 2), "éé...");
    }

    #[test]
    fn test_log_message_is_bounded() {
        let body = "x".repeat(5_000);
        let message = AppError::Upstream(body).log_message();
        assert!(message.ends_with("..."));
        assert!(message.chars().count() <= LOGGED_MESSAGE_CHARS + 3);

        let short = AppError::Upstream("boom".into());
        assert_eq!(short.log_message(), short.to_string());
    }
}
