// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Detection service contract.
//!
//! All semantic detection work (model ensembling, sentence segmentation,
//! highlight rendering) happens behind this trait. The router only ever
//! holds an `Arc<dyn DetectionService>`, constructed once at startup.

use thiserror::Error;

use super::types::{
    DetectionResult, HighlightFormat, HighlightOutcome, ModelDescriptor, SentenceDetectionResult,
};

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("detector sidecar request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("detector sidecar returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("invalid detector sidecar response: {0}")]
    InvalidResponse(String),
}

/// Detection capability consumed by the HTTP router.
///
/// Implementations must be stateless or internally synchronized; one shared
/// instance serves all requests concurrently.
#[async_trait::async_trait]
pub trait DetectionService: Send + Sync {
    /// Default ensemble detection, optionally restricted to named models
    async fn detect_ensemble(
        &self,
        text: &str,
        models: Option<&[String]>,
    ) -> Result<DetectionResult, DetectorError>;

    /// Run every available model
    async fn detect_with_all_models(&self, text: &str) -> Result<DetectionResult, DetectorError>;

    /// Run the top `n` models ranked by `criteria`
    async fn detect_with_top_models(
        &self,
        text: &str,
        n: usize,
        criteria: &str,
    ) -> Result<DetectionResult, DetectorError>;

    /// Run exactly the named models
    async fn detect_with_selected_models(
        &self,
        text: &str,
        models: &[String],
    ) -> Result<DetectionResult, DetectorError>;

    /// Descriptors for every model the service knows about
    async fn available_models(&self) -> Result<Vec<ModelDescriptor>, DetectorError>;

    /// Classify each sentence of `text` against `threshold`
    async fn detect_ai_sentences(
        &self,
        text: &str,
        threshold: f64,
    ) -> Result<SentenceDetectionResult, DetectorError>;

    /// Render `text` with AI-attributed spans marked, returning the rendered
    /// string and the sentence analysis from the same pass
    async fn highlight_ai_text(
        &self,
        text: &str,
        threshold: f64,
        format: HighlightFormat,
    ) -> Result<HighlightOutcome, DetectorError>;
}
