// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! HighlightRequest type for POST /highlight_ai
//!
//! The `format` field stays a raw string through validation so the wire
//! error message is exact; it is only parsed into a [`HighlightFormat`]
//! once validation has passed.

use crate::api::ApiError;
use crate::detection::{HighlightFormat, ALLOWED_FORMATS};
use serde::{Deserialize, Serialize};

/// Minimum accepted text length, in characters
pub const MIN_TEXT_CHARS: usize = 50;
/// Maximum accepted text length, in characters
pub const MAX_TEXT_CHARS: usize = 15_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightRequest {
    /// Text to highlight; leading/trailing whitespace is ignored
    #[serde(default)]
    pub text: String,

    /// Per-sentence probability cutoff
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Output rendering: "markdown", "html", or "plain"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_threshold() -> f64 {
    0.6
}

fn default_format() -> String {
    "markdown".to_string()
}

impl HighlightRequest {
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// The requested output format, if valid
    pub fn format(&self) -> Option<HighlightFormat> {
        HighlightFormat::parse(&self.format)
    }

    /// Validates the request.
    ///
    /// The format check runs before the length bounds so a bad format is
    /// rejected before any detection work could start.
    pub fn validate(&self) -> Result<(), ApiError> {
        let text = self.text();
        if text.is_empty() {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: "No text provided".to_string(),
            });
        }

        if !ALLOWED_FORMATS.contains(&self.format.as_str()) {
            return Err(ApiError::ValidationError {
                field: "format".to_string(),
                message: "format must be 'markdown', 'html', or 'plain'".to_string(),
            });
        }

        let chars = text.chars().count();
        if chars < MIN_TEXT_CHARS {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: "Text must be at least 50 characters long for highlighting".to_string(),
            });
        }
        if chars > MAX_TEXT_CHARS {
            return Err(ApiError::ValidationError {
                field: "text".to_string(),
                message: "Text must be less than 15,000 characters for highlighting".to_string(),
            });
        }

        Ok(())
    }
}
