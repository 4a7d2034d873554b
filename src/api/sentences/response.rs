// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Response body for POST /detect_sentences

use crate::detection::{SentenceAnalysis, SentenceStatistics};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentencesResponse {
    pub ai_detected_sentences: Vec<String>,
    pub human_sentences: Vec<String>,
    pub sentence_analysis: Vec<SentenceAnalysis>,
    pub statistics: SentenceStatistics,
    pub threshold_used: f64,
    /// Length of the analyzed (trimmed) text, in characters
    pub text_length: usize,
    pub success: bool,
}
