//! 目录 DTO

use serde::Serialize;

use crate::models::{Country, Figure};

#[derive(Debug, Serialize)]
pub struct CountryListResponse {
    pub countries: Vec<Country>,
}

/// 人物摘要（用于前端链接）
#[derive(Debug, Serialize, PartialEq)]
pub struct FigureSummary {
    pub id: String,
    pub name: String,
}

impl From<Figure> for FigureSummary {
    fn from(figure: Figure) -> Self {
        Self {
            id: figure.id,
            name: figure.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FigureListResponse {
    pub figures: Vec<FigureSummary>,
}
