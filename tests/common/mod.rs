// Shared fixtures for integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// A minimal valid country record.
pub fn country_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "code": id.chars().take(3).collect::<String>().to_uppercase(),
        "capital": format!("{name} City"),
        "population": 1_000_000u64,
        "gdp": 100.0,
        "government_type": "Republic",
        "current_events": [
            {"id": format!("{id}_election"), "title": format!("{name} election"),
             "date": "2018-10-07", "category": "domestic_policy",
             "description": "General election.", "severity": "medium"},
            {"id": format!("{id}_summit"), "title": format!("{name} summit"),
             "date": "2024-03-01", "category": "foreign_policy",
             "description": "Regional summit.", "severity": "low"}
        ],
        "historical_figures": [
            {"id": format!("{id}_leader"), "name": format!("{name} Leader"),
             "role": "President", "birth_year": 1960, "death_year": null,
             "biography": "Leader.", "achievements": [], "related_countries": [name]}
        ]
    })
}

pub async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
