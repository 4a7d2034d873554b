// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /highlight_ai HTTP handler
//!
//! One detection-service call returns both the rendered text and the
//! sentence statistics; nothing is computed twice.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use tracing::{error, info};

use super::request::HighlightRequest;
use super::response::HighlightResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

pub async fn highlight_handler(
    State(state): State<AppState>,
    payload: Result<Json<HighlightRequest>, JsonRejection>,
) -> Result<Json<HighlightResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let format = request.format().ok_or_else(|| ApiError::ValidationError {
        field: "format".to_string(),
        message: "format must be 'markdown', 'html', or 'plain'".to_string(),
    })?;

    let text = request.text();
    let outcome = state
        .detector
        .highlight_ai_text(text, request.threshold, format)
        .await
        .map_err(|e| {
            error!("Error in /highlight_ai: {}", e);
            ApiError::InternalError(e.to_string())
        })?;

    info!(
        "Text highlighting completed: {} AI sentences highlighted",
        outcome.sentences.ai_detected_sentences.len()
    );

    Ok(Json(HighlightResponse {
        original_text: text.to_string(),
        highlighted_text: outcome.highlighted_text,
        output_format: format.as_str().to_string(),
        threshold_used: request.threshold,
        ai_sentences_count: outcome.sentences.ai_detected_sentences.len(),
        total_sentences: outcome.sentences.sentence_analysis.len(),
        ai_percentage: outcome.sentences.statistics.ai_percentage,
        text_length: text.chars().count(),
        success: true,
    }))
}
