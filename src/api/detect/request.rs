// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! DetectRequest type for POST /detect
//!
//! Carries the full set of detection options and resolves which detection
//! entry point a request maps to.

use crate::api::ApiError;
use serde::{Deserialize, Serialize};

/// Minimum accepted text length, in characters
pub const MIN_TEXT_CHARS: usize = 20;
/// Maximum accepted text length, in characters
pub const MAX_TEXT_CHARS: usize = 50_000;

/// Request body for POST /detect
///
/// # Example
/// ```json
/// {
///   "text": "This is a test sentence that is definitely long enough.",
///   "threshold": 0.5,
///   "top_n": 3,
///   "criteria": "performance"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    /// Text to classify; leading/trailing whitespace is ignored
    #[serde(default)]
    pub text: String,

    /// Probability cutoff above which the text is classified as AI
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Restrict detection to these named models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,

    /// Run every available model, overriding all other selection fields
    #[serde(default)]
    pub use_all_models: bool,

    /// Run only the top N models ranked by `criteria`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_n: Option<i64>,

    /// Ranking criteria for `top_n`
    #[serde(default = "default_criteria")]
    pub criteria: String,
}

fn default_threshold() -> f64 {
    0.7
}

fn default_criteria() -> String {
    "performance".to_string()
}

/// Which detection entry point a request resolves to.
///
/// First match wins: all-models, then top-N, then an explicit model list,
/// then the default ensemble.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionStrategy {
    AllModels,
    TopModels { n: usize, criteria: String },
    SelectedModels(Vec<String>),
    Ensemble,
}

impl DetectRequest {
    /// The text to analyze, trimmed
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Validates the request
    ///
    /// All checks run against the trimmed text; bounds are counted in
    /// characters, not bytes.
    pub fn validate(&self) -> Result<(), ApiError> {
        let text = self.text();
        if text.is_empty() {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: "No text provided".to_string(),
            });
        }

        let chars = text.chars().count();
        if chars < MIN_TEXT_CHARS {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: "Text must be at least 20 characters long".to_string(),
            });
        }
        if chars > MAX_TEXT_CHARS {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: "Text must be less than 50,000 characters".to_string(),
            });
        }

        Ok(())
    }

    /// Resolve the detection strategy for this request.
    ///
    /// A `top_n` of zero or less and an empty `models` list both fall
    /// through to the next strategy rather than erroring.
    pub fn strategy(&self) -> DetectionStrategy {
        if self.use_all_models {
            return DetectionStrategy::AllModels;
        }
        if let Some(n) = self.top_n {
            if n > 0 {
                return DetectionStrategy::TopModels {
                    n: n as usize,
                    criteria: self.criteria.clone(),
                };
            }
        }
        if let Some(ref models) = self.models {
            if !models.is_empty() {
                return DetectionStrategy::SelectedModels(models.clone());
            }
        }
        DetectionStrategy::Ensemble
    }
}
