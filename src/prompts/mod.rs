//! 提示词构建
//!
//! Pure functions that render model prompts from request data and catalogue snapshots.

use crate::models::{ChatContext, ChatExchange, Country};

/// Most recent history turns included in a chat prompt.
pub const HISTORY_WINDOW: usize = 5;
pub const DIGEST_MAX_COUNTRIES: usize = 40;
pub const DIGEST_MAX_EVENTS: usize = 5;
pub const DIGEST_MAX_FIGURES: usize = 5;

pub const CHAT_TEMPERATURE: f32 = 0.7;
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;
pub const QUIZ_TEMPERATURE: f32 = 0.8;
pub const COUNTRY_TEMPERATURE: f32 = 0.5;

const EMPTY_DIGEST: &str = "No country data available.";

/// 对话提示词
pub fn chat_prompt(
    message: &str,
    context: Option<&ChatContext>,
    history: &[ChatExchange],
) -> String {
    let mut context_info = String::new();
    if let Some(context) = context {
        if let Some(country) = context.country_label() {
            context_info.push_str(&format!("\nUser is currently viewing: {country}"));
        }
        if let Some(event) = context.event_label() {
            context_info.push_str(&format!("\nRelated event: {event}"));
        }
    }

    let skip = history.len().saturating_sub(HISTORY_WINDOW);
    let history_text: String = history[skip..]
        .iter()
        .map(|turn| format!("\n{}", turn.render()))
        .collect();

    format!(
        r#"You are an expert AI Political Navigator assistant helping users understand 21st century politics.
You provide clear, balanced, factual information about political events, policies, and figures.
{context_info}

Previous conversation:
{history_text}

User question: {message}

Provide a clear, informative response. Be objective and cite relevant historical context when helpful.
Keep your response concise (2-3 paragraphs maximum).
"#
    )
}

/// 实体识别提示词
pub fn entity_analysis_prompt(text: &str, country_context: Option<&str>) -> String {
    let hint = country_context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| format!("\nThe text is being read in the context of: {c}\n"))
        .unwrap_or_default();

    format!(
        r#"Analyze this political text and identify ALL mentions of:
1. Countries (full names or common references)
2. Historical/political figures (leaders, politicians, activists)
{hint}
TEXT: "{text}"

Return a JSON array of entities with this structure:
[
  {{
    "text": "exact text from original",
    "type": "country" or "figure",
    "id": "suggested_id_snake_case",
    "start": character_position_start,
    "end": character_position_end
  }}
]

IMPORTANT:
- Return ONLY valid JSON array
- Use exact character positions from the original text
- Include all relevant entities
- Use snake_case for IDs
"#
    )
}

/// Compact fact sheet of the catalogue used to ground quiz questions.
///
/// Covers at most [`DIGEST_MAX_COUNTRIES`] countries, each with at most
/// [`DIGEST_MAX_EVENTS`] events and [`DIGEST_MAX_FIGURES`] figures.
pub fn quiz_digest(countries: &[Country]) -> String {
    if countries.is_empty() {
        return EMPTY_DIGEST.to_string();
    }

    countries
        .iter()
        .take(DIGEST_MAX_COUNTRIES)
        .map(|c| {
            let events = if c.current_events.is_empty() {
                "(none)".to_string()
            } else {
                c.current_events
                    .iter()
                    .take(DIGEST_MAX_EVENTS)
                    .map(|e| format!("{} ({})", e.title, e.date))
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            let figures = if c.historical_figures.is_empty() {
                "(none)".to_string()
            } else {
                c.historical_figures
                    .iter()
                    .take(DIGEST_MAX_FIGURES)
                    .map(|f| format!("{} ({})", f.name, f.role))
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            format!(
                "- {} (capital: {}, government: {})\n  Events: {events}\n  Figures: {figures}",
                c.name, c.capital, c.government_type
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn quiz_question_prompt(digest: &str) -> String {
    format!(
        r#"You are a quiz generator for a political education app. Using ONLY the facts below, generate exactly ONE multiple-choice question (in English) that can be answered from this data.

POLITICAL DATA (use only this information):
{digest}

Rules:
- Question must be answerable from the data above only.
- Return exactly 4 options; one must be correct.
- correctIndex is 0-based (0, 1, 2, or 3).
- Output ONLY valid JSON, no markdown or extra text:
{{"question": "Your question here?", "options": ["Option A", "Option B", "Option C", "Option D"], "correctIndex": 0}}
"#
    )
}

/// 国家资料生成提示词
pub fn country_generation_prompt(name: &str) -> String {
    format!(
        r#"Generate comprehensive political information for {name} in the 21st century.

Return ONLY valid JSON with this exact structure:
{{
  "id": "country_code_lowercase",
  "name": "{name}",
  "code": "ISO 3166 alpha-3 code",
  "capital": "capital city",
  "population": population_number,
  "gdp": gdp_in_billions_usd,
  "government_type": "type of government",
  "current_events": [
    {{
      "id": "event_id",
      "title": "Event title",
      "date": "YYYY-MM-DD",
      "category": "foreign_policy|domestic_policy|economy|social|military|environment",
      "description": "Detailed description (2-3 sentences)",
      "severity": "low|medium|high",
      "related_countries": ["country1", "country2"],
      "related_figures": ["figure1", "figure2"]
    }}
  ],
  "historical_figures": [
    {{
      "id": "figure_id",
      "name": "Full name",
      "role": "Position/role",
      "birth_year": year_or_null,
      "death_year": year_or_null,
      "biography": "Brief biography (2-3 sentences)",
      "achievements": ["achievement1", "achievement2"],
      "related_countries": ["{name}"]
    }}
  ]
}}

Include 8-12 major events from 2000-2026 covering different categories.
Include 5-8 key political figures from the 21st century.
"#
    )
}
