//! 国家与政治事件数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::figure::Figure;

/// 事件类别
///
/// Values outside the known set are kept verbatim in `Other` so model-generated
/// categories survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventCategory {
    ForeignPolicy,
    DomesticPolicy,
    Economy,
    Social,
    Military,
    Environment,
    Other(String),
}

impl EventCategory {
    pub fn as_str(&self) -> &str {
        match self {
            EventCategory::ForeignPolicy => "foreign_policy",
            EventCategory::DomesticPolicy => "domestic_policy",
            EventCategory::Economy => "economy",
            EventCategory::Social => "social",
            EventCategory::Military => "military",
            EventCategory::Environment => "environment",
            EventCategory::Other(value) => value,
        }
    }
}

impl From<String> for EventCategory {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "foreign_policy" => EventCategory::ForeignPolicy,
            "domestic_policy" => EventCategory::DomesticPolicy,
            "economy" => EventCategory::Economy,
            "social" => EventCategory::Social,
            "military" => EventCategory::Military,
            "environment" => EventCategory::Environment,
            _ => EventCategory::Other(value),
        }
    }
}

impl From<EventCategory> for String {
    fn from(value: EventCategory) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 事件严重程度
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Other(value) => value,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            _ => Severity::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 事件后续进展
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDevelopment {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// 政治事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Event {
    /// 事件 ID（仅在所属国家内唯一）
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    /// ISO 日期字符串
    pub date: String,
    pub category: EventCategory,
    pub description: String,
    pub severity: Severity,
    /// 相关国家名称（自由文本，不保证与国家 ID 对应）
    #[serde(default)]
    pub related_countries: Vec<String>,
    #[serde(default)]
    pub related_figures: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developments: Option<Vec<EventDevelopment>>,
}

/// 国家记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Country {
    /// 稳定的 slug，在数据存储中唯一
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    /// ISO 3166-1 alpha-3
    pub code: String,
    pub capital: String,
    pub population: u64,
    #[serde(default)]
    pub gdp: Option<f64>,
    pub government_type: String,
    /// 按日期从新到旧排列
    #[serde(default)]
    #[validate(nested)]
    pub current_events: Vec<Event>,
    #[serde(default)]
    #[validate(nested)]
    pub historical_figures: Vec<Figure>,
}

impl Country {
    /// Order events newest first by their date string. Ties keep their input order.
    pub fn sort_events(&mut self) {
        self.current_events.sort_by(|a, b| b.date.cmp(&a.date));
    }

    pub fn has_event(&self, event_id: &str) -> bool {
        self.current_events.iter().any(|e| e.id == event_id)
    }
}
