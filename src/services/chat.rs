//! 对话服务
//!
//! Stateless: the caller supplies the history with every message.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::gateway::ModelGateway;
use crate::models::{ChatContext, ChatExchange};
use crate::prompts::{CHAT_TEMPERATURE, chat_prompt};

/// 模型回复
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

#[async_trait]
pub trait ChatService: Send + Sync {
    async fn reply(
        &self,
        message: &str,
        context: Option<&ChatContext>,
        history: &[ChatExchange],
    ) -> Result<ChatReply>;
}

pub struct ChatServiceImpl {
    gateway: Arc<dyn ModelGateway>,
}

impl ChatServiceImpl {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn reply(
        &self,
        message: &str,
        context: Option<&ChatContext>,
        history: &[ChatExchange],
    ) -> Result<ChatReply> {
        debug!(history = history.len(), "Building chat prompt");
        let prompt = chat_prompt(message, context, history);
        let response = self.gateway.generate(&prompt, CHAT_TEMPERATURE).await?;

        Ok(ChatReply {
            response,
            timestamp: Utc::now(),
        })
    }
}

pub fn create_chat_service(gateway: Arc<dyn ModelGateway>) -> Box<dyn ChatService> {
    Box::new(ChatServiceImpl::new(gateway))
}
