//! Axum route handler for résumé analysis.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::extract::word_count;
use crate::analysis::models::FeedbackResult;
use crate::analysis::upload::{read_resume_field, save_upload, NO_FILE_UPLOADED};
use crate::errors::{AppError, EXTRACTION_FAILED};
use crate::state::AppState;

/// POST /analyze
///
/// validate → save (temp file) → extract → critique → respond.
/// The temp file is gone before the AI call starts; early returns drop it too.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<FeedbackResult>, AppError> {
    let request_id = Uuid::new_v4();

    // Not a multipart body at all: nothing was uploaded.
    let mut multipart =
        multipart.map_err(|_| AppError::Validation(NO_FILE_UPLOADED.to_string()))?;

    let upload = read_resume_field(&mut multipart).await?;
    let saved = save_upload(&state.config.upload_dir, upload).await?;
    info!(
        %request_id,
        filename = %saved.filename,
        bytes = saved.size,
        "Resume received"
    );

    let resume_text = match state.extractor.extract(saved.path()).await {
        Ok(text) => text,
        Err(e) => {
            warn!(%request_id, filename = %saved.filename, "Text extraction failed: {e}");
            return Err(e.into());
        }
    };

    if resume_text.trim().is_empty() {
        warn!(%request_id, filename = %saved.filename, "PDF contained no extractable text");
        return Err(AppError::Extraction(EXTRACTION_FAILED.to_string()));
    }

    if let Err(e) = saved.close() {
        warn!(%request_id, "Failed to remove uploaded file: {e}");
    }

    let words = word_count(&resume_text);
    let feedback = state.llm.analyze_resume(&resume_text).await?;

    info!(%request_id, word_count = words, model = state.llm.model(), "Resume analyzed");

    Ok(Json(FeedbackResult::new(feedback, words)))
}
