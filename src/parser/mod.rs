//! 模型输出解析
//!
//! Recovers a typed value from semi-structured model text:
//!
//! 1. drop markdown code fences (optionally tagged `json`);
//! 2. take the span from the first `{`/`[` to the last matching `}`/`]`;
//! 3. decode the first JSON value in that span and check it against the target shape.
//!
//! Step 2 is a heuristic, not a bracket matcher. It assumes the model emits a single
//! JSON value and no stray braces in surrounding prose. When several values are present
//! only the first one is decoded.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, Result, truncate_for_log};
use crate::models::{Country, GeneratedQuizQuestion, HighlightedEntity};

const SNIPPET_CHARS: usize = 200;

static TAGGED_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```json\s*").expect("fence pattern is valid"));

/// Remove ```` ```json ```` and bare ```` ``` ```` markers.
pub fn strip_code_fences(text: &str) -> String {
    TAGGED_FENCE.replace_all(text, "").replace("```", "")
}

/// Greedy span from the first opening bracket to the last closer of the same kind.
pub fn extract_json_span(text: &str) -> Option<&str> {
    text.char_indices().find_map(|(start, ch)| {
        let closer = match ch {
            '{' => '}',
            '[' => ']',
            _ => return None,
        };
        text.rfind(closer)
            .filter(|&end| end > start)
            .map(|end| &text[start..=end])
    })
}

fn parse_error(raw: &str, reason: impl std::fmt::Display) -> AppError {
    AppError::Parse(format!(
        "{reason}; raw response: {}",
        truncate_for_log(raw.trim(), SNIPPET_CHARS)
    ))
}

/// Recover the first JSON object or array embedded in `raw`.
pub fn extract_json(raw: &str) -> Result<Value> {
    let cleaned = strip_code_fences(raw);
    let span = extract_json_span(&cleaned).ok_or_else(|| parse_error(raw, "no JSON value found"))?;

    let mut values = serde_json::Deserializer::from_str(span).into_iter::<Value>();
    match values.next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(parse_error(raw, format!("invalid JSON ({e})"))),
        None => Err(parse_error(raw, "no JSON value found")),
    }
}

/// Recover and deserialize into `T`.
pub fn parse_as<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let value = extract_json(raw)?;
    decode(raw, value)
}

fn decode<T: DeserializeOwned>(raw: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| parse_error(raw, format!("unexpected shape ({e})")))
}

fn decode_validated<T: DeserializeOwned + Validate>(raw: &str, value: Value) -> Result<T> {
    let parsed: T = decode(raw, value)?;
    parsed
        .validate()
        .map_err(|e| parse_error(raw, format!("schema mismatch ({e})")))?;
    Ok(parsed)
}

/// Entity array produced by the analysis prompt.
pub fn parse_entities(raw: &str) -> Result<Vec<HighlightedEntity>> {
    parse_as(raw)
}

/// Quiz question; `correct_index` is accepted in place of `correctIndex`.
pub fn parse_quiz_question(raw: &str) -> Result<GeneratedQuizQuestion> {
    let mut value = extract_json(raw)?;
    if let Value::Object(map) = &mut value {
        if !map.contains_key("correctIndex") {
            if let Some(index) = map.remove("correct_index") {
                map.insert("correctIndex".to_string(), index);
            }
        }
    }
    decode_validated(raw, value)
}

/// Full country record produced by the generation prompt.
pub fn parse_country(raw: &str) -> Result<Country> {
    let value = extract_json(raw)?;
    decode_validated(raw, value)
}
