// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /detect endpoint tests
//!
//! Covers the validation bounds, the strategy priority order
//! (use_all_models > top_n > models > default ensemble), the threshold
//! comparison, and the error wire shapes.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use humanize_detector_node::api::{create_app, AppState};
use humanize_detector_node::detection::{MockCall, MockDetector};
use std::sync::Arc;
use tower::util::ServiceExt;

const VALID_TEXT: &str = "This is a test sentence that is definitely long enough.";

fn app_with(mock: Arc<MockDetector>) -> axum::Router {
    create_app(AppState::new(mock))
}

fn post_detect(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/detect")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_valid_request_returns_detection_result() {
    let mock = Arc::new(MockDetector::with_probability(0.85));
    let app = app_with(mock.clone());

    let request = post_detect(&format!(
        r#"{{"text": "{}", "threshold": 0.5}}"#,
        VALID_TEXT
    ));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let probability = body["detection_result"]["ensemble_ai_probability"]
        .as_f64()
        .unwrap();
    assert!((0.0..=1.0).contains(&probability));
    assert_eq!(body["is_ai"], true);
    assert_eq!(body["threshold"], 0.5);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_short_text_rejected() {
    let app = app_with(Arc::new(MockDetector::new()));

    let response = app
        .oneshot(post_detect(r#"{"text": "short"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Text must be at least 20 characters long");
    assert!(body.get("success").is_none());
}

#[tokio::test]
async fn test_missing_text_rejected() {
    let app = app_with(Arc::new(MockDetector::new()));

    let response = app.oneshot(post_detect("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn test_whitespace_only_text_rejected() {
    let app = app_with(Arc::new(MockDetector::new()));

    let response = app
        .oneshot(post_detect(r#"{"text": "    \n   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn test_oversized_text_rejected() {
    let app = app_with(Arc::new(MockDetector::new()));

    let text = "a".repeat(50_001);
    let response = app
        .oneshot(post_detect(&format!(r#"{{"text": "{}"}}"#, text)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Text must be less than 50,000 characters");
}

#[tokio::test]
async fn test_default_threshold_is_point_seven() {
    let mock = Arc::new(MockDetector::with_probability(0.75));
    let app = app_with(mock);

    let response = app
        .oneshot(post_detect(&format!(r#"{{"text": "{}"}}"#, VALID_TEXT)))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["threshold"], 0.7);
    assert_eq!(body["is_ai"], true);
}

#[tokio::test]
async fn test_probability_equal_to_threshold_is_not_ai() {
    let mock = Arc::new(MockDetector::with_probability(0.7));
    let app = app_with(mock);

    let response = app
        .oneshot(post_detect(&format!(
            r#"{{"text": "{}", "threshold": 0.7}}"#,
            VALID_TEXT
        )))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["is_ai"], false);
}

#[tokio::test]
async fn test_use_all_models_overrides_everything() {
    let mock = Arc::new(MockDetector::new());
    let app = app_with(mock.clone());

    let request = post_detect(&format!(
        r#"{{"text": "{}", "use_all_models": true, "top_n": 3, "models": ["roberta"]}}"#,
        VALID_TEXT
    ));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(mock.calls(), vec![MockCall::AllModels]);
}

#[tokio::test]
async fn test_top_n_invokes_top_models_with_criteria() {
    let mock = Arc::new(MockDetector::new());
    let app = app_with(mock.clone());

    let request = post_detect(&format!(
        r#"{{"text": "{}", "top_n": 3, "criteria": "performance"}}"#,
        VALID_TEXT
    ));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        mock.calls(),
        vec![MockCall::TopModels {
            n: 3,
            criteria: "performance".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_models_list_invokes_selected_models() {
    let mock = Arc::new(MockDetector::new());
    let app = app_with(mock.clone());

    let request = post_detect(&format!(
        r#"{{"text": "{}", "models": ["roberta", "gpt2-output"]}}"#,
        VALID_TEXT
    ));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        mock.calls(),
        vec![MockCall::SelectedModels {
            models: vec!["roberta".to_string(), "gpt2-output".to_string()],
        }]
    );
}

#[tokio::test]
async fn test_plain_request_uses_default_ensemble() {
    let mock = Arc::new(MockDetector::new());
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_detect(&format!(r#"{{"text": "{}"}}"#, VALID_TEXT)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(mock.calls(), vec![MockCall::Ensemble { models: None }]);
}

#[tokio::test]
async fn test_detector_failure_returns_generic_500() {
    let app = app_with(Arc::new(MockDetector::failing()));

    let response = app
        .oneshot(post_detect(&format!(r#"{{"text": "{}"}}"#, VALID_TEXT)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_wrong_content_type_rejected() {
    let app = app_with(Arc::new(MockDetector::new()));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/detect")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(format!(r#"{{"text": "{}"}}"#, VALID_TEXT)))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Content-Type must be application/json");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = app_with(Arc::new(MockDetector::new()));

    let response = app
        .oneshot(post_detect(r#"{"text": "unterminated"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Request body must be valid JSON");
}
