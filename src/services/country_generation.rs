//! 国家资料生成服务
//!
//! A generated country becomes visible only after it parses and validates in full. The
//! catalogue write lock is taken after the model call returns.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::Result;
use crate::gateway::ModelGateway;
use crate::models::Country;
use crate::parser::parse_country;
use crate::prompts::{COUNTRY_TEMPERATURE, country_generation_prompt};
use crate::storage::CatalogueStore;

#[async_trait]
pub trait CountryGenerationService: Send + Sync {
    /// Generate a full record for `name` and upsert it (with its figures) into the catalogue.
    async fn generate(&self, name: &str) -> Result<Country>;
}

pub struct CountryGenerationServiceImpl {
    gateway: Arc<dyn ModelGateway>,
    catalogue: Arc<CatalogueStore>,
}

impl CountryGenerationServiceImpl {
    pub fn new(gateway: Arc<dyn ModelGateway>, catalogue: Arc<CatalogueStore>) -> Self {
        Self { gateway, catalogue }
    }
}

#[async_trait]
impl CountryGenerationService for CountryGenerationServiceImpl {
    async fn generate(&self, name: &str) -> Result<Country> {
        info!(country = %name, "Generating country info");

        let raw = self
            .gateway
            .generate(&country_generation_prompt(name), COUNTRY_TEMPERATURE)
            .await?;

        let mut country = parse_country(&raw).inspect_err(|e| {
            error!(country = %name, "Generated country rejected: {}", e);
        })?;
        country.sort_events();

        let replaced = self.catalogue.upsert_country(country.clone());
        info!(
            country_id = %country.id,
            events = country.current_events.len(),
            figures = country.historical_figures.len(),
            replaced = replaced.is_some(),
            "Stored generated country"
        );
        Ok(country)
    }
}

pub fn create_country_generation_service(
    gateway: Arc<dyn ModelGateway>,
    catalogue: Arc<CatalogueStore>,
) -> Box<dyn CountryGenerationService> {
    Box::new(CountryGenerationServiceImpl::new(gateway, catalogue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::gateway::MockModelGateway;
    use serde_json::json;

    fn brazil_json() -> String {
        json!({
            "id": "brazil",
            "name": "Brazil",
            "code": "BRA",
            "capital": "Brasília",
            "population": 216_000_000u64,
            "gdp": 2170.0,
            "government_type": "Federal presidential republic",
            "current_events": [
                {"id": "lula_returns", "title": "Lula returns", "date": "2023-01-01",
                 "category": "domestic_policy", "description": "d", "severity": "high"},
                {"id": "brasilia_riots", "title": "Brasília riots", "date": "2023-01-08",
                 "category": "social", "description": "d", "severity": "high"}
            ],
            "historical_figures": [
                {"id": "lula", "name": "Luiz Inácio Lula da Silva", "role": "President",
                 "birth_year": 1945, "death_year": null}
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_generated_country_is_stored_with_figures() {
        let mut gateway = MockModelGateway::new();
        gateway
            .expect_generate()
            .withf(|prompt, temperature| prompt.contains("Brazil") && *temperature == 0.5)
            .returning(|_, _| Ok(format!("```json\n{}\n```", brazil_json())));

        let catalogue = Arc::new(CatalogueStore::new());
        let service = create_country_generation_service(Arc::new(gateway), catalogue.clone());

        let country = service.generate("Brazil").await.unwrap();
        assert_eq!(country.current_events[0].id, "brasilia_riots");

        let stored = catalogue.get_country("brazil").unwrap();
        assert_eq!(stored, country);
        assert!(catalogue.get_figure("lula").is_some());
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_store_untouched() {
        let mut gateway = MockModelGateway::new();
        gateway
            .expect_generate()
            .returning(|_, _| Ok(r#"{"id": "brazil", "name": "Brazil"}"#.to_string()));

        let catalogue = Arc::new(CatalogueStore::new());
        let service = create_country_generation_service(Arc::new(gateway), catalogue.clone());

        let err = service.generate("Brazil").await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert_eq!(catalogue.country_count(), 0);
        assert_eq!(catalogue.figure_count(), 0);
    }
}
