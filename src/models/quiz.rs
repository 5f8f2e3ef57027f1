//! 测验题目模型

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const QUIZ_OPTION_COUNT: usize = 4;

/// 由模型生成的单选题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeneratedQuizQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(equal = 4))]
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    #[serde(rename = "correctIndex")]
    #[validate(range(max = 3))]
    pub correct_index: usize,
}

impl GeneratedQuizQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}
