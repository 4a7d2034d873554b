// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::detect::detect_handler;
use super::errors::ApiError;
use super::highlight::highlight_handler;
use super::sentences::detect_sentences_handler;
use crate::detection::{DetectionService, ModelDescriptor};

/// Shared state for all handlers: one detection service instance,
/// constructed at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn DetectionService>,
}

impl AppState {
    pub fn new(detector: Arc<dyn DetectionService>) -> Self {
        Self { detector }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub ai_detection: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelDescriptor>,
    pub success: bool,
}

/// Build the application router. Exposed so tests can drive it directly.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get(health_handler))
        // Model listing
        .route("/models", get(models_handler))
        // Detection endpoints
        .route("/detect", post(detect_handler))
        .route("/detect_sentences", post(detect_sentences_handler))
        .route("/highlight_ai", post(highlight_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(listen_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;

    info!("Detector API listening on {}", listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received, stopping API server");
        })
        .await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    axum::response::Json(HealthResponse {
        status: "healthy".to_string(),
        message: "🚀 Humanize AI Server is running! (Detector only)".to_string(),
        features: FeatureFlags { ai_detection: true },
    })
}

async fn models_handler(
    State(state): State<AppState>,
) -> Result<axum::response::Json<ModelsResponse>, ApiError> {
    let models = state.detector.available_models().await.map_err(|e| {
        error!("Failed to list detection models: {}", e);
        ApiError::InternalError("Failed to list detection models".to_string())
    })?;

    Ok(axum::response::Json(ModelsResponse {
        models,
        success: true,
    }))
}
