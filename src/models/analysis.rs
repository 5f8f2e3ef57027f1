//! 文本实体分析模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Country,
    Figure,
    #[serde(other)]
    Other,
}

/// 文本中被识别出的实体
///
/// `start`/`end` are character offsets into the analysed text as reported by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightedEntity {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub id: String,
    pub start: usize,
    pub end: usize,
}
