use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers;
use crate::shared::config::Config;

/// Read-only state shared by the handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub max_horizon_months: u32,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_horizon_months: config.limits.max_horizon_months,
        }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    // Unknown paths fall through to the SPA
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D410 Funnel Forecast
        .route(
            "/api/d410/defaults",
            get(handlers::d410_funnel_forecast::get_defaults),
        )
        .route(
            "/api/d410/controls",
            get(handlers::d410_funnel_forecast::get_controls),
        )
        .route(
            "/api/d410/compute",
            post(handlers::d410_funnel_forecast::compute_funnel),
        )
        .route(
            "/api/d410/project",
            post(handlers::d410_funnel_forecast::project_growth),
        )
        // Indicators
        .route(
            "/api/indicators/meta",
            get(handlers::indicators::get_indicator_catalog),
        )
        .fallback_service(spa)
        .with_state(state)
}
