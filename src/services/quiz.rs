//! 测验题生成服务

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::error::Result;
use crate::gateway::ModelGateway;
use crate::models::GeneratedQuizQuestion;
use crate::parser::parse_quiz_question;
use crate::prompts::{DIGEST_MAX_COUNTRIES, QUIZ_TEMPERATURE, quiz_digest, quiz_question_prompt};
use crate::storage::CatalogueStore;

#[async_trait]
pub trait QuizService: Send + Sync {
    /// One question grounded in the current catalogue. Parse failures are returned as errors.
    async fn generate_question(&self) -> Result<GeneratedQuizQuestion>;
}

pub struct QuizServiceImpl {
    gateway: Arc<dyn ModelGateway>,
    catalogue: Arc<CatalogueStore>,
}

impl QuizServiceImpl {
    pub fn new(gateway: Arc<dyn ModelGateway>, catalogue: Arc<CatalogueStore>) -> Self {
        Self { gateway, catalogue }
    }
}

#[async_trait]
impl QuizService for QuizServiceImpl {
    async fn generate_question(&self) -> Result<GeneratedQuizQuestion> {
        let digest = quiz_digest(&self.catalogue.take_countries(DIGEST_MAX_COUNTRIES));
        debug!(digest_chars = digest.len(), "Built quiz digest");

        let raw = self
            .gateway
            .generate(&quiz_question_prompt(&digest), QUIZ_TEMPERATURE)
            .await?;

        parse_quiz_question(&raw).inspect_err(|e| {
            error!("Failed to parse generated question: {}", e);
        })
    }
}

pub fn create_quiz_service(
    gateway: Arc<dyn ModelGateway>,
    catalogue: Arc<CatalogueStore>,
) -> Box<dyn QuizService> {
    Box::new(QuizServiceImpl::new(gateway, catalogue))
}
