// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /detect_sentences HTTP handler

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use tracing::{error, info};

use super::request::SentencesRequest;
use super::response::SentencesResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

pub async fn detect_sentences_handler(
    State(state): State<AppState>,
    payload: Result<Json<SentencesRequest>, JsonRejection>,
) -> Result<Json<SentencesResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let text = request.text();
    let result = state
        .detector
        .detect_ai_sentences(text, request.threshold)
        .await
        .map_err(|e| {
            error!("Error in sentence detection: {}", e);
            ApiError::InternalError("Failed to detect AI sentences".to_string())
        })?;

    info!(
        "Sentence detection: {}/{} sentences detected as AI",
        result.statistics.ai_generated_sentences, result.statistics.total_sentences_analyzed
    );

    Ok(Json(SentencesResponse {
        ai_detected_sentences: result.ai_detected_sentences,
        human_sentences: result.human_sentences,
        sentence_analysis: result.sentence_analysis,
        statistics: result.statistics,
        threshold_used: result.threshold_used,
        text_length: text.chars().count(),
        success: true,
    }))
}
