//! 服务模块
//!
//! Each service composes prompt building, the model gateway and response parsing for one
//! use case.

pub mod analysis;
pub mod chat;
pub mod country_generation;
pub mod quiz;

use std::sync::Arc;

use crate::gateway::ModelGateway;
use crate::storage::CatalogueStore;

pub use analysis::{AnalysisService, create_analysis_service};
pub use chat::{ChatReply, ChatService, create_chat_service};
pub use country_generation::{CountryGenerationService, create_country_generation_service};
pub use quiz::{QuizService, create_quiz_service};

/// 依赖模型的全部服务
pub struct NavigatorServices {
    pub chat: Box<dyn ChatService>,
    pub analysis: Box<dyn AnalysisService>,
    pub quiz: Box<dyn QuizService>,
    pub countries: Box<dyn CountryGenerationService>,
}

pub fn create_navigator_services(
    gateway: Arc<dyn ModelGateway>,
    catalogue: Arc<CatalogueStore>,
) -> NavigatorServices {
    NavigatorServices {
        chat: create_chat_service(gateway.clone()),
        analysis: create_analysis_service(gateway.clone()),
        quiz: create_quiz_service(gateway.clone(), catalogue.clone()),
        countries: create_country_generation_service(gateway, catalogue),
    }
}
