// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Response body for POST /highlight_ai

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightResponse {
    /// The (trimmed) input text as analyzed
    pub original_text: String,
    /// Input text with AI-attributed spans marked
    pub highlighted_text: String,
    /// Rendering format actually used
    pub output_format: String,
    pub threshold_used: f64,
    pub ai_sentences_count: usize,
    pub total_sentences: usize,
    pub ai_percentage: f64,
    /// Length of the analyzed (trimmed) text, in characters
    pub text_length: usize,
    pub success: bool,
}
