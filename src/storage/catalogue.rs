//! 内存目录存储
//!
//! Country and figure records live behind one `RwLock` so that a generated country and
//! its figures become visible together. The lock is only ever held for the in-memory
//! update itself, never across a model call.

use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::models::{Country, Figure};

#[derive(Debug, Default)]
struct Catalogue {
    countries: BTreeMap<String, Country>,
    figures: BTreeMap<String, Figure>,
}

/// 国家与人物的共享存储，按 ID 排序
#[derive(Debug, Default)]
pub struct CatalogueStore {
    inner: RwLock<Catalogue>,
}

impl CatalogueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let store = Self::new();
        for country in countries {
            store.upsert_country(country);
        }
        store
    }

    /// Insert or replace a country by id and merge its figures into the figure store.
    ///
    /// Events are re-sorted newest first before the record becomes visible. Returns the
    /// replaced record, if any.
    pub fn upsert_country(&self, mut country: Country) -> Option<Country> {
        country.sort_events();

        let mut catalogue = self.inner.write();
        for figure in &country.historical_figures {
            catalogue.figures.insert(figure.id.clone(), figure.clone());
        }
        catalogue.countries.insert(country.id.clone(), country)
    }

    pub fn get_country(&self, id: &str) -> Option<Country> {
        self.inner.read().countries.get(id).cloned()
    }

    pub fn list_countries(&self) -> Vec<Country> {
        self.inner.read().countries.values().cloned().collect()
    }

    /// First `limit` countries in id order.
    pub fn take_countries(&self, limit: usize) -> Vec<Country> {
        self.inner
            .read()
            .countries
            .values()
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn get_figure(&self, id: &str) -> Option<Figure> {
        self.inner.read().figures.get(id).cloned()
    }

    pub fn list_figures(&self) -> Vec<Figure> {
        self.inner.read().figures.values().cloned().collect()
    }

    pub fn country_count(&self) -> usize {
        self.inner.read().countries.len()
    }

    pub fn figure_count(&self) -> usize {
        self.inner.read().figures.len()
    }
}
