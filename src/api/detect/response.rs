// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Response body for POST /detect

use crate::detection::DetectionResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    /// Opaque result from the detection service
    pub detection_result: DetectionResult,
    /// Whether the ensemble probability exceeded the request threshold
    pub is_ai: bool,
    /// Threshold the classification was made against
    pub threshold: f64,
    pub success: bool,
}
