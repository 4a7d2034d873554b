// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod detection;
pub mod version;

// Re-export main types
pub use api::{create_app, start_server, ApiError, AppState};
pub use detection::{
    DetectionResult, DetectionService, DetectorClient, DetectorError, HighlightFormat,
    MockDetector,
};
