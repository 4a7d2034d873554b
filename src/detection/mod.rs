// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod client;
pub mod mock;
pub mod service;
pub mod types;

pub use client::DetectorClient;
pub use mock::{MockCall, MockDetector};
pub use service::{DetectionService, DetectorError};
pub use types::{
    DetectionResult, HighlightFormat, HighlightOutcome, ModelDescriptor, SentenceAnalysis,
    SentenceDetectionResult, SentenceStatistics, ALLOWED_FORMATS,
};
