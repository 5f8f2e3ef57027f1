// Gemini gateway against a mock HTTP server

use political_navigator::config::config::GeminiConfig;
use political_navigator::error::AppError;
use political_navigator::gateway::{GeminiGateway, ModelGateway};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn gateway_for(server: &MockServer, timeout_secs: u64) -> GeminiGateway {
    GeminiGateway::new(&GeminiConfig {
        api_key: Some("test-key".into()),
        base_url: server.uri(),
        timeout_secs,
        ..GeminiConfig::default()
    })
    .unwrap()
}

fn candidate(text: &str) -> serde_json::Value {
    json!({"candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]})
}

#[tokio::test]
async fn test_success_returns_first_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "Who is the president of France?"}]}],
            "generationConfig": {"topK": 40}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("Emmanuel Macron.")))
        .expect(1)
        .mount(&server)
        .await;

    let text = gateway_for(&server, 5)
        .generate("Who is the president of France?", 0.7)
        .await
        .unwrap();
    assert_eq!(text, "Emmanuel Macron.");
}

#[tokio::test]
async fn test_429_is_quota_exceeded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("RESOURCE_EXHAUSTED"))
        .mount(&server)
        .await;

    let err = gateway_for(&server, 5).generate("hi", 0.5).await.unwrap_err();
    match err {
        AppError::QuotaExceeded(message) => assert!(message.contains("quota")),
        other => panic!("expected QuotaExceeded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_other_status_is_upstream_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal model failure"))
        .mount(&server)
        .await;

    let err = gateway_for(&server, 5).generate("hi", 0.5).await.unwrap_err();
    match err {
        AppError::Upstream(body) => assert_eq!(body, "internal model failure"),
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_envelope_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = gateway_for(&server, 5).generate("hi", 0.5).await.unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
}

#[tokio::test]
async fn test_missing_candidates_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = gateway_for(&server, 5).generate("hi", 0.5).await.unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
}

#[tokio::test]
async fn test_slow_response_is_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = gateway_for(&server, 1).generate("hi", 0.5).await.unwrap_err();
    assert!(matches!(err, AppError::UpstreamTimeout(_)));
}

#[tokio::test]
async fn test_connection_failure_does_not_expose_api_key() {
    // nothing listens on port 1
    let gateway = GeminiGateway::new(&GeminiConfig {
        api_key: Some("SECRET123".into()),
        base_url: "http://127.0.0.1:1".into(),
        timeout_secs: 5,
        ..GeminiConfig::default()
    })
    .unwrap();

    let err = gateway.generate("hi", 0.5).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Upstream(_) | AppError::UpstreamTimeout(_)
    ));
    assert!(!err.to_string().contains("SECRET123"), "{err}");
    assert!(!format!("{err:?}").contains("SECRET123"));
}
