//! 国家资料生成 DTO

use serde::Serialize;
use validator::Validate;

use crate::models::Country;

/// 路径中的国家名称（已去除首尾空白）
#[derive(Debug, Validate)]
pub struct CountryNameParam {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl CountryNameParam {
    pub fn new(raw: &str) -> Self {
        Self {
            name: raw.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateCountryResponse {
    pub status: &'static str,
    pub country: Country,
}
