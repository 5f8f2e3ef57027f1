//! 静态目录文件加载
//!
//! The bundled file is a JSON document with a top-level `countries` array. Each element
//! is deserialized and validated on its own: in lenient mode a bad entry is logged and
//! skipped, in strict mode it aborts the whole load.

use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};
use validator::Validate;

use crate::config::config::DataConfig;
use crate::error::{AppError, Result};
use crate::models::Country;
use crate::storage::catalogue::CatalogueStore;

#[derive(Debug, Deserialize)]
struct RawCatalogue {
    #[serde(default)]
    countries: Vec<serde_json::Value>,
}

/// 加载结果
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: CatalogueStore,
    pub loaded: usize,
    pub skipped: Vec<SkippedCountry>,
}

#[derive(Debug, Clone)]
pub struct SkippedCountry {
    /// Position in the `countries` array.
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Load the catalogue named by `config`. A missing file yields an empty store.
pub fn load_catalogue(config: &DataConfig) -> Result<LoadOutcome> {
    let path: &Path = &config.path;
    if !path.exists() {
        warn!(
            "No catalogue file found at {}; the catalogue will be empty",
            path.display()
        );
        return Ok(LoadOutcome {
            store: CatalogueStore::new(),
            loaded: 0,
            skipped: vec![],
        });
    }

    let json = std::fs::read_to_string(path)?;
    let outcome = parse_catalogue(&json, config.strict)?;

    info!(
        "Loaded {} countries and {} figures from {}",
        outcome.store.country_count(),
        outcome.store.figure_count(),
        path.display()
    );
    if !outcome.skipped.is_empty() {
        warn!("Skipped {} invalid country entries", outcome.skipped.len());
    }

    Ok(outcome)
}

/// Parse catalogue JSON into a store.
pub fn parse_catalogue(json: &str, strict: bool) -> Result<LoadOutcome> {
    let raw: RawCatalogue = serde_json::from_str(json)?;

    let store = CatalogueStore::new();
    let mut loaded = 0;
    let mut skipped = Vec::new();

    for (index, value) in raw.countries.into_iter().enumerate() {
        let id = value
            .get("id")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        match decode_country(value) {
            Ok(country) => {
                if store.upsert_country(country).is_some() {
                    warn!("Duplicate country id {:?} at index {}; later entry wins", id, index);
                }
                loaded += 1;
            }
            Err(reason) if strict => {
                return Err(AppError::Validation(format!(
                    "country entry {index} ({}) is invalid: {reason}",
                    id.as_deref().unwrap_or("no id")
                )));
            }
            Err(reason) => {
                warn!("Skipping country entry {} ({:?}): {}", index, id, reason);
                skipped.push(SkippedCountry { index, id, reason });
            }
        }
    }

    Ok(LoadOutcome {
        store,
        loaded,
        skipped,
    })
}

fn decode_country(value: serde_json::Value) -> std::result::Result<Country, String> {
    let country: Country = serde_json::from_value(value).map_err(|e| e.to_string())?;
    country.validate().map_err(|e| e.to_string())?;
    Ok(country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": id.to_uppercase(),
            "code": "XXX",
            "capital": "Capital",
            "population": 1000,
            "gdp": 12.5,
            "government_type": "Republic",
            "current_events": [
                {"id": "e1", "title": "Older", "date": "2010-01-01", "category": "economy",
                 "description": "d", "severity": "low"},
                {"id": "e2", "title": "Newer", "date": "2023-03-01", "category": "military",
                 "description": "d", "severity": "high"}
            ],
            "historical_figures": [
                {"id": format!("{id}_leader"), "name": "Leader", "role": "President",
                 "birth_year": 1950, "death_year": null, "biography": "b",
                 "achievements": [], "related_countries": [id]}
            ]
        })
    }

    #[test]
    fn test_loaded_events_sorted_descending() {
        let doc = json!({ "countries": [country_json("alpha"), country_json("beta")] });
        let outcome = parse_catalogue(&doc.to_string(), false).unwrap();

        assert_eq!(outcome.loaded, 2);
        for country in outcome.store.list_countries() {
            let dates: Vec<_> = country.current_events.iter().map(|e| e.date.clone()).collect();
            let mut sorted = dates.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(dates, sorted);
        }
        assert!(outcome.store.get_figure("alpha_leader").is_some());
    }

    #[test]
    fn test_lenient_mode_skips_bad_entries() {
        let mut broken = country_json("broken");
        broken.as_object_mut().unwrap().remove("capital");
        let doc = json!({ "countries": [country_json("alpha"), broken] });

        let outcome = parse_catalogue(&doc.to_string(), false).unwrap();
        assert_eq!(outcome.loaded, 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].index, 1);
        assert_eq!(outcome.skipped[0].id.as_deref(), Some("broken"));
        assert!(outcome.store.get_country("broken").is_none());
    }

    #[test]
    fn test_strict_mode_rejects_bad_entries() {
        let mut broken = country_json("broken");
        broken["id"] = json!("");
        let doc = json!({ "countries": [broken] });

        let err = parse_catalogue(&doc.to_string(), true).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_catalogue("{ not json", false).is_err());
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let config = DataConfig {
            path: "definitely/not/here.json".into(),
            strict: true,
        };
        let outcome = load_catalogue(&config).unwrap();
        assert_eq!(outcome.store.country_count(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, json!({ "countries": [country_json("alpha")] }).to_string()).unwrap();

        let outcome = load_catalogue(&DataConfig { path, strict: false }).unwrap();
        assert_eq!(outcome.store.country_count(), 1);
    }
}
