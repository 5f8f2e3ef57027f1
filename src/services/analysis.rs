//! 文本实体分析服务
//!
//! Best-effort: unparseable model output degrades to an empty entity list. Gateway
//! failures (timeout, quota, upstream) still propagate.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::gateway::ModelGateway;
use crate::models::HighlightedEntity;
use crate::parser::parse_entities;
use crate::prompts::{ANALYSIS_TEMPERATURE, entity_analysis_prompt};

#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(
        &self,
        text: &str,
        country_context: Option<&str>,
    ) -> Result<Vec<HighlightedEntity>>;
}

pub struct AnalysisServiceImpl {
    gateway: Arc<dyn ModelGateway>,
}

impl AnalysisServiceImpl {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl AnalysisService for AnalysisServiceImpl {
    async fn analyze(
        &self,
        text: &str,
        country_context: Option<&str>,
    ) -> Result<Vec<HighlightedEntity>> {
        let prompt = entity_analysis_prompt(text, country_context);
        let raw = self.gateway.generate(&prompt, ANALYSIS_TEMPERATURE).await?;

        match parse_entities(&raw) {
            Ok(entities) => {
                debug!(count = entities.len(), "Entities recognised");
                Ok(entities)
            }
            Err(AppError::Parse(reason)) => {
                warn!("Failed to parse entities, returning none: {}", reason);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

pub fn create_analysis_service(gateway: Arc<dyn ModelGateway>) -> Box<dyn AnalysisService> {
    Box::new(AnalysisServiceImpl::new(gateway))
}
