//! Integration tests for the prediction API
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot`; no socket
//! is bound.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use regression::{save_model, training_data, LinearRegression};
use server::{app, load_state, AppState, ModelState};
use std::sync::Arc;
use tower::ServiceExt;

// OLS solution for the fixed ten-point dataset
const SLOPE: f64 = 182.0 / 165.0;
const INTERCEPT: f64 = 14.0 / 15.0;

fn fitted_model() -> LinearRegression {
    let (x, y) = training_data();
    let mut model = LinearRegression::new();
    model.fit(&x, &y).unwrap();
    model
}

fn loaded_state() -> AppState {
    AppState {
        model: Arc::new(ModelState::Loaded(Arc::new(fitted_model()))),
    }
}

fn predict_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_root_returns_welcome_text() {
    let response = app(loaded_state())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(!bytes.is_empty());
}

#[tokio::test]
async fn get_root_works_without_model() {
    let state = AppState {
        model: Arc::new(ModelState::Missing),
    };
    let response = app(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn predict_single_feature() {
    let response = app(loaded_state())
        .oneshot(predict_request(r#"{"features": [15]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let prediction = body["prediction"].as_array().unwrap();
    assert_eq!(prediction.len(), 1);
    let expected = SLOPE * 15.0 + INTERCEPT;
    assert!((prediction[0].as_f64().unwrap() - expected).abs() < 1e-9);
}

#[tokio::test]
async fn predict_preserves_input_order() {
    let response = app(loaded_state())
        .oneshot(predict_request(r#"{"features": [10, 1, 5]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let prediction = body["prediction"].as_array().unwrap();
    assert_eq!(prediction.len(), 3);
    for (value, input) in prediction.iter().zip([10.0, 1.0, 5.0]) {
        let expected = SLOPE * input + INTERCEPT;
        assert!((value.as_f64().unwrap() - expected).abs() < 1e-9);
    }
}

#[tokio::test]
async fn predict_empty_features_returns_empty_list() {
    let response = app(loaded_state())
        .oneshot(predict_request(r#"{"features": []}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["prediction"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn predict_missing_features_key_is_bad_request() {
    let response = app(loaded_state())
        .oneshot(predict_request(r#"{"inputs": [1, 2]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("features"));
}

#[tokio::test]
async fn predict_invalid_json_is_bad_request() {
    let response = app(loaded_state())
        .oneshot(predict_request("not json at all"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn predict_non_numeric_feature_is_server_error() {
    let response = app(loaded_state())
        .oneshot(predict_request(r#"{"features": [1, "two", 3]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("index 1"));
}

#[tokio::test]
async fn predict_without_artifact_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState {
        model: Arc::new(load_state(dir.path().join("model.json"))),
    };

    let response = app(state)
        .oneshot(predict_request(r#"{"features": [15]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not loaded"));
}

#[tokio::test]
async fn predict_with_corrupt_artifact_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, "definitely not a model").unwrap();

    let state = AppState {
        model: Arc::new(load_state(&path)),
    };
    assert!(!state.model.is_loaded());

    let response = app(state)
        .oneshot(predict_request(r#"{"features": [15]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not loaded"));
}

#[tokio::test]
async fn startup_load_from_saved_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    save_model(&fitted_model(), &path).unwrap();

    let state = AppState {
        model: Arc::new(load_state(&path)),
    };
    assert!(state.model.is_loaded());

    let response = app(state)
        .oneshot(predict_request(r#"{"features": [15]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let expected = SLOPE * 15.0 + INTERCEPT;
    assert!((body["prediction"][0].as_f64().unwrap() - expected).abs() < 1e-9);
}

#[tokio::test]
async fn health_reports_model_state() {
    let response = app(loaded_state())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "alive");
    assert_eq!(body["model_loaded"], true);

    let missing = AppState {
        model: Arc::new(ModelState::Missing),
    };
    let response = app(missing)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn concurrent_predictions_are_independent() {
    let app = app(loaded_state());

    let requests = (0..8).map(|i| {
        let app = app.clone();
        let body = format!(r#"{{"features": [{}]}}"#, i);
        async move {
            let response = app.oneshot(predict_request(&body)).await.unwrap();
            (i, response)
        }
    });

    for (i, response) in futures::future::join_all(requests).await {
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let expected = SLOPE * i as f64 + INTERCEPT;
        assert!((body["prediction"][0].as_f64().unwrap() - expected).abs() < 1e-9);
    }
}
