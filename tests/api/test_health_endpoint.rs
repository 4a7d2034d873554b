// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET / health check tests
//!
//! The health endpoint is static: it must answer 200 with
//! `features.ai_detection == true` no matter what state the detection
//! service is in.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use humanize_detector_node::api::{create_app, AppState};
use humanize_detector_node::detection::MockDetector;
use std::sync::Arc;
use tower::util::ServiceExt;

fn get_root() -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_returns_200() {
    let app = create_app(AppState::new(Arc::new(MockDetector::new())));

    let response = app.oneshot(get_root()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_payload_shape() {
    let app = create_app(AppState::new(Arc::new(MockDetector::new())));

    let response = app.oneshot(get_root()).await.unwrap();
    let body = body_json(response).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["features"]["ai_detection"], true);
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn test_health_unaffected_by_failing_detector() {
    let app = create_app(AppState::new(Arc::new(MockDetector::failing())));

    let response = app.oneshot(get_root()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["features"]["ai_detection"], true);
}
