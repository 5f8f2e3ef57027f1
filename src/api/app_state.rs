use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::services::NavigatorServices;
use crate::storage::CatalogueStore;
use crate::websocket::ConnectionRegistry;

const MODEL_UNAVAILABLE: &str = "Gemini API key not configured";

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Country and figure catalogue
    pub catalogue: Arc<CatalogueStore>,
    /// Model-backed services; absent when no model credential is configured
    pub services: Option<Arc<NavigatorServices>>,
    /// Live realtime connections
    pub connections: Arc<ConnectionRegistry>,
    pub started_at: DateTime<Utc>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("countries", &self.catalogue.country_count())
            .field("figures", &self.catalogue.figure_count())
            .field("services", &self.services.as_ref().map(|_| "NavigatorServices"))
            .field("connections", &self.connections.len())
            .field("started_at", &self.started_at)
            .finish()
    }
}

impl AppState {
    pub fn new(catalogue: Arc<CatalogueStore>, services: Option<NavigatorServices>) -> Self {
        Self {
            catalogue,
            services: services.map(Arc::new),
            connections: Arc::new(ConnectionRegistry::new()),
            started_at: Utc::now(),
        }
    }

    /// Model-backed services, or `ServiceUnavailable` when the credential is missing.
    pub fn services(&self) -> Result<&NavigatorServices> {
        self.services
            .as_deref()
            .ok_or_else(|| AppError::ServiceUnavailable(MODEL_UNAVAILABLE.to_string()))
    }
}
