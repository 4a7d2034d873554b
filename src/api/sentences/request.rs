// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! SentencesRequest type for POST /detect_sentences
//!
//! Sentence-level detection needs enough text to segment, so the bounds are
//! tighter than /detect's on the low end and on the high end.

use crate::api::ApiError;
use serde::{Deserialize, Serialize};

/// Minimum accepted text length, in characters
pub const MIN_TEXT_CHARS: usize = 50;
/// Maximum accepted text length, in characters
pub const MAX_TEXT_CHARS: usize = 15_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentencesRequest {
    /// Text to analyze; leading/trailing whitespace is ignored
    #[serde(default)]
    pub text: String,

    /// Per-sentence probability cutoff
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.6
}

impl SentencesRequest {
    pub fn text(&self) -> &str {
        self.text.trim()
    }

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
                message: "Text must be at least 50 characters long for sentence detection"
                    .to_string(),
            });
        }
        if chars > MAX_TEXT_CHARS {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: "Text must be less than 15,000 characters for sentence detection"
                    .to_string(),
            });
        }

        Ok(())
    }
}
