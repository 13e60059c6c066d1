//! API route handlers
//!
//! Every request-time failure is converted into an [`ApiError`] at the
//! handler boundary and rendered as a structured JSON error response; none
//! of them crash the process.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::{AppState, ModelState};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request-time errors, each mapped to a fixed status code
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not valid JSON or does not match the expected shape
    #[error("Invalid JSON format. Please send {{\"features\": [value, ...]}} ({0})")]
    MalformedRequest(String),

    /// No model was loaded at startup
    #[error("{0}")]
    ModelUnavailable(String),

    /// Feature conversion or model evaluation failed
    #[error("Inference error: {0}")]
    Inference(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ModelUnavailable(_) | ApiError::Inference(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

pub async fn home() -> &'static str {
    "Welcome to the Simple ML API! Use /predict to get predictions."
}

/// Liveness probe; always 200, reports whether the model is loaded
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
        "model_loaded": state.model.is_loaded(),
    }))
}

/// Validate the request body shape and extract the feature vector
///
/// A missing or non-array `features` field is a client error; a non-numeric
/// element inside the array is an inference failure.
fn parse_features(body: &Value) -> Result<Vec<f64>, ApiError> {
    let features = body
        .get("features")
        .ok_or_else(|| ApiError::MalformedRequest("missing 'features' field".to_string()))?;

    let items = features
        .as_array()
        .ok_or_else(|| ApiError::MalformedRequest("'features' must be an array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(i, value)| {
            value.as_f64().ok_or_else(|| {
                ApiError::Inference(format!("non-numeric feature at index {}: {}", i, value))
            })
        })
        .collect()
}

/// `POST /predict`
///
/// Each scalar in `features` is an independent single-feature input; the
/// response carries one prediction per input, in input order.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let model = match state.model.as_ref() {
        ModelState::Loaded(model) => model,
        unavailable => return Err(ApiError::ModelUnavailable(unavailable.unavailable_message())),
    };

    let Json(body) = payload.map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;
    let features = parse_features(&body)?;

    let prediction = model
        .predict(&features)
        .map_err(|err| ApiError::Inference(err.to_string()))?;

    Ok(Json(PredictResponse { prediction }))
}
