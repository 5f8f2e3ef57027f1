//! 对话数据模型
//!
//! Conversation history is supplied by the caller on every request and never stored.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChatRole {
    User,
    Assistant,
    Other(String),
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::Other(value) => value,
        }
    }
}

impl From<String> for ChatRole {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => ChatRole::User,
            "assistant" => ChatRole::Assistant,
            _ => ChatRole::Other(value),
        }
    }
}

impl From<ChatRole> for String {
    fn from(value: ChatRole) -> Self {
        value.as_str().to_string()
    }
}

/// 单条历史对话
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChatExchange {
    pub role: ChatRole,
    #[validate(length(min = 1))]
    pub content: String,
}

impl ChatExchange {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// `ROLE: content`
    pub fn render(&self) -> String {
        format!("{}: {}", self.role.as_str().to_uppercase(), self.content)
    }
}

/// What the user is looking at while chatting.
///
/// Values are free-form: a plain name or an object sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatContext {
    #[serde(default)]
    pub country: Option<serde_json::Value>,
    #[serde(default)]
    pub event: Option<serde_json::Value>,
}

impl ChatContext {
    pub fn country_label(&self) -> Option<String> {
        self.country.as_ref().and_then(label)
    }

    pub fn event_label(&self) -> Option<String> {
        self.event.as_ref().and_then(label)
    }
}

fn label(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
