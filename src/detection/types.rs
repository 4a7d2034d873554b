// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Result and parameter types shared between the detection service trait,
//! the sidecar client, and the API layer.

use serde::{Deserialize, Serialize};

/// Output formats accepted by the highlighting endpoint
pub const ALLOWED_FORMATS: &[&str] = &["markdown", "html", "plain"];

/// Ensemble detection output.
///
/// Only `ensemble_ai_probability` is interpreted at this layer; everything
/// else the detection service returns (per-model probabilities, timing,
/// model metadata) is carried through to the caller untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub ensemble_ai_probability: f64,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Per-sentence classification entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    pub sentence: String,
    pub ai_probability: f64,
    pub is_ai: bool,
}

/// Summary statistics for a sentence-level analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceStatistics {
    pub ai_generated_sentences: usize,
    pub total_sentences_analyzed: usize,
    pub ai_percentage: f64,
}

/// Sentence-level detection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceDetectionResult {
    pub ai_detected_sentences: Vec<String>,
    pub human_sentences: Vec<String>,
    pub sentence_analysis: Vec<SentenceAnalysis>,
    pub statistics: SentenceStatistics,
    pub threshold_used: f64,
}

/// Highlighted text plus the sentence result it was derived from.
///
/// Both artifacts come out of a single analysis pass on the service side,
/// so callers never have to re-run sentence detection to get statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightOutcome {
    pub highlighted_text: String,
    pub sentences: SentenceDetectionResult,
}

/// Descriptor for one detection model known to the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
}

/// Rendering format for highlighted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightFormat {
    Markdown,
    Html,
    Plain,
}

impl HighlightFormat {
    /// Parse a wire-format string into a `HighlightFormat`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "markdown" => Some(HighlightFormat::Markdown),
            "html" => Some(HighlightFormat::Html),
            "plain" => Some(HighlightFormat::Plain),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightFormat::Markdown => "markdown",
            HighlightFormat::Html => "html",
            HighlightFormat::Plain => "plain",
        }
    }
}
