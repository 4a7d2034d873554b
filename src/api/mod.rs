// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod detect;
pub mod errors;
pub mod highlight;
pub mod http_server;
pub mod sentences;

pub use detect::{detect_handler, DetectRequest, DetectResponse, DetectionStrategy};
pub use errors::{ApiError, ErrorResponse};
pub use highlight::{highlight_handler, HighlightRequest, HighlightResponse};
pub use http_server::{
    create_app, start_server, AppState, FeatureFlags, HealthResponse, ModelsResponse,
};
pub use sentences::{detect_sentences_handler, SentencesRequest, SentencesResponse};
