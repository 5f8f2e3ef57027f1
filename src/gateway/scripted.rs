//! Offline gateway that answers from a script instead of the network.
//!
//! Used by the HTTP tests in place of the Gemini gateway.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::gateway::ModelGateway;

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Text(String),
    Timeout,
    QuotaExceeded,
    Upstream(String),
}

impl ScriptedReply {
    fn into_result(self) -> Result<String> {
        match self {
            ScriptedReply::Text(text) => Ok(text),
            ScriptedReply::Timeout => Err(AppError::UpstreamTimeout(
                "no response from the model".into(),
            )),
            ScriptedReply::QuotaExceeded => {
                Err(AppError::QuotaExceeded("Daily API quota exceeded.".into()))
            }
            ScriptedReply::Upstream(body) => Err(AppError::Upstream(body)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub temperature: f32,
}

type Responder = dyn Fn(&str) -> ScriptedReply + Send + Sync;

pub struct ScriptedGateway {
    responder: Box<Responder>,
    delay: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGateway {
    /// Always answer with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::from_fn(move |_| ScriptedReply::Text(text.clone()))
    }

    /// Always answer with `reply`.
    pub fn failing(reply: ScriptedReply) -> Self {
        Self::from_fn(move |_| reply.clone())
    }

    /// Answer by inspecting the prompt.
    pub fn from_fn(responder: impl Fn(&str) -> ScriptedReply + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Sleep before every answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

impl std::fmt::Debug for ScriptedGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedGateway")
            .field("delay", &self.delay)
            .field("calls", &self.calls.lock().len())
            .finish()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        self.calls.lock().push(RecordedCall {
            prompt: prompt.to_string(),
            temperature,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        (self.responder)(prompt).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls() {
        let gateway = ScriptedGateway::replying("hi");
        assert_eq!(gateway.generate("prompt one", 0.3).await.unwrap(), "hi");

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "prompt one");
        assert_eq!(calls[0].temperature, 0.3);
    }

    #[tokio::test]
    async fn test_failures_map_to_errors() {
        let gateway = ScriptedGateway::failing(ScriptedReply::Timeout);
        assert!(matches!(
            gateway.generate("p", 0.5).await,
            Err(AppError::UpstreamTimeout(_))
        ));

        let gateway = ScriptedGateway::failing(ScriptedReply::QuotaExceeded);
        assert!(matches!(
            gateway.generate("p", 0.5).await,
            Err(AppError::QuotaExceeded(_))
        ));
    }
}
