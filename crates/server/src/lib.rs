//! # server
//!
//! REST API server exposing the trained linear regression model.
//!
//! The model artifact is loaded exactly once, before the router is built;
//! request handlers only ever read the resulting [`ModelState`], so no
//! locking is needed. Construction is explicit so tests can inject any
//! state they like.

use axum::{
    routing::{get, post},
    Router,
};
use regression::{LinearRegression, MODEL_PATH};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod routes;

/// Outcome of the one-time artifact load at startup
#[derive(Debug)]
pub enum ModelState {
    /// Artifact deserialized into a fitted model
    Loaded(Arc<LinearRegression>),
    /// Artifact file absent; the trainer has not been run
    Missing,
    /// Artifact present but failed to load
    Failed(String),
}

impl ModelState {
    /// Whether predictions can be served
    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelState::Loaded(_))
    }

    /// Human-readable explanation for why predictions are unavailable
    pub fn unavailable_message(&self) -> String {
        match self {
            ModelState::Loaded(_) => "Model is loaded.".to_string(),
            ModelState::Missing => format!(
                "Model not loaded. Run the trainer to create '{}' first.",
                MODEL_PATH
            ),
            ModelState::Failed(err) => format!("Model not loaded: {}", err),
        }
    }
}

/// Application state shared across handlers
///
/// Populated once before the server accepts requests and never mutated
/// afterwards.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ModelState>,
}

/// Load the model artifact from `path`, exactly once
///
/// Never retries and never blocks beyond the single file read. The outcome
/// is logged and captured in the returned [`ModelState`].
pub fn load_state<P: AsRef<Path>>(path: P) -> ModelState {
    let path = path.as_ref();
    if !path.exists() {
        tracing::error!(
            "model artifact '{}' not found; run the trainer first",
            path.display()
        );
        return ModelState::Missing;
    }

    match regression::load_model(path) {
        Ok(model) if model.is_fitted() => {
            tracing::info!(
                "model artifact '{}' loaded (slope {:.6}, intercept {:.6})",
                path.display(),
                model.slope(),
                model.intercept()
            );
            ModelState::Loaded(Arc::new(model))
        }
        Ok(_) => {
            tracing::error!("model artifact '{}' contains an unfitted model", path.display());
            ModelState::Failed("artifact contains an unfitted model".to_string())
        }
        Err(err) => {
            tracing::error!("failed to load model artifact '{}': {}", path.display(), err);
            ModelState::Failed(err.to_string())
        }
    }
}

/// Build the router with middleware
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health))
        .route("/predict", post(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
