//! 历史人物数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 历史/政治人物
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Figure {
    /// 在人物存储中唯一
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub related_countries: Vec<String>,
}
