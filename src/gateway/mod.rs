//! 模型网关
//!
//! The only component that talks to the external text-generation service. Everything
//! above it depends on the [`ModelGateway`] trait so it can run against canned replies.

use async_trait::async_trait;

use crate::error::Result;

pub mod gemini;
pub mod scripted;

pub use gemini::GeminiGateway;
pub use scripted::{RecordedCall, ScriptedGateway, ScriptedReply};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Obtain generated text for `prompt`. `temperature` is clamped to `0.0..=1.0`.
    ///
    /// Fails with `UpstreamTimeout`, `QuotaExceeded`, `Upstream` or `Parse`; never retries.
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String>;
}
