//! Gemini generateContent client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use crate::config::config::GeminiConfig;
use crate::error::{AppError, Result, truncate_for_log};
use crate::gateway::ModelGateway;

const QUOTA_MESSAGE: &str = "Daily API quota exceeded. Please try again tomorrow or upgrade your API plan.";
const LOGGED_BODY_CHARS: usize = 300;

/// Fixed sampling parameters sent with every request.
pub const TOP_P: f32 = 0.8;
pub const TOP_K: u32 = 40;

// --- request/response envelopes ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    text: Option<String>,
}

impl GenerationConfig {
    fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature: temperature.clamp(0.0, 1.0),
            top_p: TOP_P,
            top_k: TOP_K,
        }
    }
}

impl GenerateContentResponse {
    fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// A [`ModelGateway`] backed by the Gemini `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GeminiGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiGateway {
    /// Build a gateway from config. Fails with `ServiceUnavailable` when no credential is set.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .credential()
            .ok_or_else(|| AppError::ServiceUnavailable("Gemini API key not configured".into()))?
            .to_string();

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            api_key,
            model: config.model.clone(),
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The request URL carries the API key, so it is stripped before the error is logged
    /// or returned.
    fn transport_error(&self, e: reqwest::Error) -> AppError {
        let e = e.without_url();
        if e.is_timeout() {
            error!("Gemini API timeout after {}s", self.timeout.as_secs());
            AppError::UpstreamTimeout(format!(
                "no response from the model within {}s",
                self.timeout.as_secs()
            ))
        } else {
            error!("Gemini API transport error: {}", e);
            AppError::Upstream(e.to_string())
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::with_temperature(temperature),
        };

        debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Calling Gemini API"
        );
        let started = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            error!(
                status = status.as_u16(),
                "Gemini API error: {}",
                truncate_for_log(&text, LOGGED_BODY_CHARS)
            );
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(AppError::QuotaExceeded(QUOTA_MESSAGE.to_string()));
            }
            return Err(AppError::Upstream(text));
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            AppError::Parse(format!(
                "malformed model envelope ({e}): {}",
                truncate_for_log(&text, LOGGED_BODY_CHARS)
            ))
        })?;

        let generated = envelope
            .into_first_text()
            .ok_or_else(|| AppError::Parse("model response contained no candidate text".into()))?;

        info!(
            chars = generated.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Got model response"
        );
        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> GeminiConfig {
        GeminiConfig {
            api_key: Some("test-key".into()),
            base_url: "http://localhost:1234/".into(),
            ..GeminiConfig::default()
        }
    }

    #[test]
    fn test_new_requires_credential() {
        let err = GeminiGateway::new(&GeminiConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_endpoint_includes_model() {
        let gateway = GeminiGateway::new(&config()).unwrap();
        assert_eq!(
            gateway.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.5,
                top_p: 0.8,
                top_k: 40,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert!(value["generationConfig"].get("topP").is_some());
        assert_eq!(value["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn test_generation_config_fixed_sampling() {
        let config = GenerationConfig::with_temperature(1.7);
        assert_eq!(config.temperature, 1.0);
        assert_eq!(config.top_p, 0.8);
        assert_eq!(config.top_k, 40);

        assert_eq!(GenerationConfig::with_temperature(-0.2).temperature, 0.0);
    }

    #[test]
    fn test_first_text_extraction() {
        let envelope: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(envelope.into_first_text().as_deref(), Some("first"));

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_first_text().is_none());

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert!(blocked.into_first_text().is_none());
    }
}
