// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! AI text detector sidecar client
//!
//! Production binding of [`DetectionService`]: forwards every call to a
//! detector sidecar over HTTP/JSON and decodes its responses.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use super::service::{DetectionService, DetectorError};
use super::types::{
    DetectionResult, HighlightFormat, HighlightOutcome, ModelDescriptor, SentenceDetectionResult,
};

/// Client for calling a detector sidecar over its JSON API
pub struct DetectorClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ModelListResponse {
    models: Vec<ModelDescriptor>,
}

impl DetectorClient {
    /// Create a new DetectorClient
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, DetectorError> {
        let client = Client::builder().timeout(timeout).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Detector client configured: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// Get the configured sidecar endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check if the detector sidecar is healthy
    pub async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.endpoint))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!("Detector health check failed: {}", e);
                false
            }
        }
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, DetectorError> {
        let url = format!("{}{}", self.endpoint, path);
        debug!("Detector POST {}", url);

        let response = self.client.post(&url).json(&body).send().await?;
        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DetectorError> {
        let url = format!("{}{}", self.endpoint, path);
        debug!("Detector GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, DetectorError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(DetectorError::Upstream { status, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DetectorError::InvalidResponse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl DetectionService for DetectorClient {
    async fn detect_ensemble(
        &self,
        text: &str,
        models: Option<&[String]>,
    ) -> Result<DetectionResult, DetectorError> {
        let mut body = json!({ "text": text, "strategy": "ensemble" });
        if let Some(models) = models {
            body["models"] = json!(models);
        }
        self.post_json("/v1/detect", body).await
    }

    async fn detect_with_all_models(&self, text: &str) -> Result<DetectionResult, DetectorError> {
        self.post_json("/v1/detect", json!({ "text": text, "strategy": "all_models" }))
            .await
    }

    async fn detect_with_top_models(
        &self,
        text: &str,
        n: usize,
        criteria: &str,
    ) -> Result<DetectionResult, DetectorError> {
        let body = json!({
            "text": text,
            "strategy": "top_models",
            "top_n": n,
            "criteria": criteria,
        });
        self.post_json("/v1/detect", body).await
    }

    async fn detect_with_selected_models(
        &self,
        text: &str,
        models: &[String],
    ) -> Result<DetectionResult, DetectorError> {
        let body = json!({
            "text": text,
            "strategy": "selected_models",
            "models": models,
        });
        self.post_json("/v1/detect", body).await
    }

    async fn available_models(&self) -> Result<Vec<ModelDescriptor>, DetectorError> {
        let list: ModelListResponse = self.get_json("/v1/models").await?;
        Ok(list.models)
    }

    async fn detect_ai_sentences(
        &self,
        text: &str,
        threshold: f64,
    ) -> Result<SentenceDetectionResult, DetectorError> {
        let body = json!({ "text": text, "threshold": threshold });
        self.post_json("/v1/detect/sentences", body).await
    }

    async fn highlight_ai_text(
        &self,
        text: &str,
        threshold: f64,
        format: HighlightFormat,
    ) -> Result<HighlightOutcome, DetectorError> {
        let body = json!({
            "text": text,
            "threshold": threshold,
            "format": format.as_str(),
        });
        self.post_json("/v1/highlight", body).await
    }
}
