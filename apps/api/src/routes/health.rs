use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub api_configured: bool,
}

/// GET /health
/// Reports liveness and whether a usable API key was supplied at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Resume analyzer with Groq AI is running".to_string(),
        api_configured: state.config.api_configured(),
    })
}
