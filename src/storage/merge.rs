//! 目录文件事件合并
//!
//! Offline maintenance of the bundled catalogue: append curated events to existing
//! countries, keyed by country id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Country, Event};

/// 目录文件（严格类型）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogueDocument {
    #[serde(default)]
    pub countries: Vec<Country>,
}

impl CatalogueDocument {
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn event_count(&self) -> usize {
        self.countries.iter().map(|c| c.current_events.len()).sum()
    }
}

/// 每个国家的合并结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryMerge {
    pub added: usize,
    /// Events whose id already existed in the country.
    pub duplicates: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    pub per_country: BTreeMap<String, CountryMerge>,
    /// Country ids in the additions that do not exist in the document.
    pub unknown_countries: Vec<String>,
}

impl MergeReport {
    pub fn total_added(&self) -> usize {
        self.per_country.values().map(|m| m.added).sum()
    }
}

/// Append `additions` to the matching countries, then re-sort each touched country's
/// events newest first. Every event is validated before anything is modified.
pub fn merge_events(
    document: &mut CatalogueDocument,
    additions: BTreeMap<String, Vec<Event>>,
) -> Result<MergeReport> {
    for (country_id, events) in &additions {
        for event in events {
            event.validate().map_err(|e| {
                AppError::Validation(format!("event {:?} for {country_id}: {e}", event.id))
            })?;
        }
    }

    let mut report = MergeReport::default();

    for (country_id, events) in additions {
        let Some(country) = document.countries.iter_mut().find(|c| c.id == country_id) else {
            report.unknown_countries.push(country_id);
            continue;
        };

        let entry = report.per_country.entry(country_id).or_default();
        for event in events {
            if country.has_event(&event.id) {
                entry.duplicates += 1;
            } else {
                country.current_events.push(event);
                entry.added += 1;
            }
        }
        country.sort_events();
    }

    Ok(report)
}
