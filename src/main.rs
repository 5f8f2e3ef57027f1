use anyhow::Context;
use political_navigator::api::{self, app_state::AppState};
use political_navigator::config::loader::ConfigLoader;
use political_navigator::gateway::{GeminiGateway, ModelGateway};
use political_navigator::observability::init_tracing;
use political_navigator::services::create_navigator_services;
use political_navigator::storage::load_catalogue;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config).context("invalid configuration")?;
    let _log_guard = init_tracing(&config.logging);

    info!(
        "Starting {} ({} environment)",
        config.app_name, config.environment
    );

    let outcome = load_catalogue(&config.data)
        .with_context(|| format!("failed to load catalogue from {}", config.data.path.display()))?;
    let catalogue = Arc::new(outcome.store);

    let services = match config.gemini.credential() {
        Some(_) => {
            let gateway = GeminiGateway::new(&config.gemini)?;
            info!("Gemini gateway ready (model: {})", gateway.model());
            let gateway: Arc<dyn ModelGateway> = Arc::new(gateway);
            Some(create_navigator_services(gateway, catalogue.clone()))
        }
        None => {
            warn!("GEMINI_API_KEY not set; model-backed endpoints will answer 503");
            None
        }
    };

    let app_state = AppState::new(catalogue, services);
    let router = api::create_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
