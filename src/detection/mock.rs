// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! In-memory detector for tests: canned results, recorded calls, optional
//! failure injection.

use std::sync::Mutex;

use super::service::{DetectionService, DetectorError};
use super::types::{
    DetectionResult, HighlightFormat, HighlightOutcome, ModelDescriptor, SentenceAnalysis,
    SentenceDetectionResult, SentenceStatistics,
};

/// One recorded invocation of the detection service
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Ensemble { models: Option<Vec<String>> },
    AllModels,
    TopModels { n: usize, criteria: String },
    SelectedModels { models: Vec<String> },
    AvailableModels,
    Sentences { threshold: f64 },
    Highlight { threshold: f64, format: HighlightFormat },
}

// Mock detection service for testing
pub struct MockDetector {
    ai_probability: f64,
    fail: bool,
    calls: Mutex<Vec<MockCall>>,
}

impl MockDetector {
    pub fn new() -> Self {
        Self::with_probability(0.85)
    }

    /// Mock whose ensemble probability is always `ai_probability`
    pub fn with_probability(ai_probability: f64) -> Self {
        Self {
            ai_probability,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock whose every operation fails with an upstream error
    pub fn failing() -> Self {
        Self {
            ai_probability: 0.0,
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// All calls recorded so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: MockCall) -> Result<(), DetectorError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(DetectorError::Upstream {
                status: 500,
                message: "mock detector failure".to_string(),
            });
        }
        Ok(())
    }

    fn detection_result(&self) -> DetectionResult {
        let mut details = serde_json::Map::new();
        details.insert(
            "individual_probabilities".to_string(),
            serde_json::json!({
                "mock-fast": self.ai_probability,
                "mock-accurate": self.ai_probability,
            }),
        );
        details.insert(
            "models_used".to_string(),
            serde_json::json!(["mock-fast", "mock-accurate"]),
        );
        DetectionResult {
            ensemble_ai_probability: self.ai_probability,
            details,
        }
    }

    fn sentence_result(&self, threshold: f64) -> SentenceDetectionResult {
        let ai_sentence = "This sentence reads as machine generated.".to_string();
        let human_sentence = "This one reads like a person wrote it.".to_string();
        SentenceDetectionResult {
            ai_detected_sentences: vec![ai_sentence.clone()],
            human_sentences: vec![human_sentence.clone()],
            sentence_analysis: vec![
                SentenceAnalysis {
                    sentence: ai_sentence,
                    ai_probability: self.ai_probability,
                    is_ai: true,
                },
                SentenceAnalysis {
                    sentence: human_sentence,
                    ai_probability: 0.12,
                    is_ai: false,
                },
            ],
            statistics: SentenceStatistics {
                ai_generated_sentences: 1,
                total_sentences_analyzed: 2,
                ai_percentage: 50.0,
            },
            threshold_used: threshold,
        }
    }
}

impl Default for MockDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DetectionService for MockDetector {
    async fn detect_ensemble(
        &self,
        _text: &str,
        models: Option<&[String]>,
    ) -> Result<DetectionResult, DetectorError> {
        self.record(MockCall::Ensemble {
            models: models.map(|m| m.to_vec()),
        })?;
        Ok(self.detection_result())
    }

    async fn detect_with_all_models(&self, _text: &str) -> Result<DetectionResult, DetectorError> {
        self.record(MockCall::AllModels)?;
        Ok(self.detection_result())
    }

    async fn detect_with_top_models(
        &self,
        _text: &str,
        n: usize,
        criteria: &str,
    ) -> Result<DetectionResult, DetectorError> {
        self.record(MockCall::TopModels {
            n,
            criteria: criteria.to_string(),
        })?;
        Ok(self.detection_result())
    }

    async fn detect_with_selected_models(
        &self,
        _text: &str,
        models: &[String],
    ) -> Result<DetectionResult, DetectorError> {
        self.record(MockCall::SelectedModels {
            models: models.to_vec(),
        })?;
        Ok(self.detection_result())
    }

    async fn available_models(&self) -> Result<Vec<ModelDescriptor>, DetectorError> {
        self.record(MockCall::AvailableModels)?;
        Ok(vec![
            ModelDescriptor {
                id: "mock-fast".to_string(),
                name: "Mock Fast Detector".to_string(),
                description: None,
                performance: Some(0.81),
            },
            ModelDescriptor {
                id: "mock-accurate".to_string(),
                name: "Mock Accurate Detector".to_string(),
                description: Some("slower, higher precision".to_string()),
                performance: Some(0.94),
            },
        ])
    }

    async fn detect_ai_sentences(
        &self,
        _text: &str,
        threshold: f64,
    ) -> Result<SentenceDetectionResult, DetectorError> {
        self.record(MockCall::Sentences { threshold })?;
        Ok(self.sentence_result(threshold))
    }

    async fn highlight_ai_text(
        &self,
        text: &str,
        threshold: f64,
        format: HighlightFormat,
    ) -> Result<HighlightOutcome, DetectorError> {
        self.record(MockCall::Highlight { threshold, format })?;
        let highlighted_text = match format {
            HighlightFormat::Markdown => format!("**{}**", text),
            HighlightFormat::Html => format!("<mark>{}</mark>", text),
            HighlightFormat::Plain => format!(">>> {}", text),
        };
        Ok(HighlightOutcome {
            highlighted_text,
            sentences: self.sentence_result(threshold),
        })
    }
}
