// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /detect HTTP handler
//!
//! Ensemble AI detection with model-selection options. Strategy priority:
//! `use_all_models` > `top_n` > `models` > default ensemble.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use tracing::{error, info};
use uuid::Uuid;

use super::request::{DetectRequest, DetectionStrategy};
use super::response::DetectResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

pub async fn detect_handler(
    State(state): State<AppState>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<DetectResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let request_id = Uuid::new_v4();
    let text = request.text();
    let strategy = request.strategy();
    info!(
        %request_id,
        "Detection request: {} chars, strategy {:?}",
        text.chars().count(),
        strategy
    );

    let result = match strategy {
        DetectionStrategy::AllModels => state.detector.detect_with_all_models(text).await,
        DetectionStrategy::TopModels { n, criteria } => {
            state.detector.detect_with_top_models(text, n, &criteria).await
        }
        DetectionStrategy::SelectedModels(models) => {
            state.detector.detect_with_selected_models(text, &models).await
        }
        DetectionStrategy::Ensemble => {
            state
                .detector
                .detect_ensemble(text, request.models.as_deref())
                .await
        }
    }
    .map_err(|e| {
        error!(%request_id, "Error processing detection: {:?}", e);
        ApiError::InternalError("Internal server error".to_string())
    })?;

    let is_ai = result.ensemble_ai_probability > request.threshold;
    Ok(Json(DetectResponse {
        detection_result: result,
        is_ai,
        threshold: request.threshold,
        success: true,
    }))
}
