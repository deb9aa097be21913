use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extract::ExtractError;
use crate::llm_client::LlmError;

/// Message returned whenever a PDF yields no usable text.
pub const EXTRACTION_FAILED: &str = "Could not extract text from PDF";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Extraction(String),

    #[error("Uploaded file exceeds the size limit")]
    PayloadTooLarge,

    #[error("AI service is not configured")]
    NotConfigured,

    #[error("Error from AI service: {0}")]
    Upstream(LlmError),

    #[error("Error processing resume: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Extraction(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NotConfigured => AppError::NotConfigured,
            other => AppError::Upstream(other),
        }
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Io(e) => AppError::Internal(anyhow::Error::new(e)),
            ExtractError::Join(e) => AppError::Internal(anyhow::Error::new(e)),
            ExtractError::Pdf(_) | ExtractError::Panicked => {
                AppError::Extraction(EXTRACTION_FAILED.to_string())
            }
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::Validation(err.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Upstream(e) => tracing::error!("AI service error: {e}"),
            AppError::NotConfigured => tracing::warn!("Analysis requested but GROQ_API_KEY is not configured"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => {}
        }

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
