//! 可观测性模块
//!
//! Structured logging setup plus the service info and health endpoints.

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde::Serialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::api::app_state::AppState;
use crate::config::config::LoggingConfig;

pub const APP_NAME: &str = "AI Political Navigator";
pub const APP_VERSION: &str = "1.0.0";

// ===== Service Info =====

/// 根路径返回的服务信息
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub app: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

pub async fn service_info() -> impl IntoResponse {
    Json(ServiceInfo {
        app: APP_NAME,
        version: APP_VERSION,
        status: "running",
    })
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub uptime_seconds: i64,
    pub countries: usize,
    pub figures: usize,
    pub model_configured: bool,
    pub realtime_connections: usize,
}

/// 获取健康状态
///
/// A missing model credential is reported as `degraded`; the catalogue endpoints still work.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let model_configured = state.services.is_some();

    Json(HealthStatus {
        status: if model_configured { "healthy" } else { "degraded" },
        timestamp: Utc::now().to_rfc3339(),
        version: APP_VERSION,
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
        countries: state.catalogue.country_count(),
        figures: state.catalogue.figure_count(),
        model_configured,
        realtime_connections: state.connections.len(),
    })
}

// ===== Structured Logging =====

/// 初始化结构化日志
///
/// `RUST_LOG` overrides the configured level. When `log_dir` is set, output also goes to a
/// daily rolling file; keep the returned guard alive for the life of the process.
pub fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", config.level)));

    let (file_writer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "political-navigator.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.structured {
        registry
            .with(fmt::layer().json().with_target(true))
            .with(file_writer.map(|w| fmt::layer().json().with_ansi(false).with_writer(w)))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(file_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w)))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing already initialised: {e}");
    }
    guard
}
