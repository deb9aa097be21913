//! PDF text extraction.
//!
//! Parsing is CPU-bound and `pdf-extract` is known to panic on some malformed
//! inputs, so it runs inside `tokio::task::spawn_blocking`; a panic there comes
//! back as a `JoinError` and is reported as an unreadable PDF.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read uploaded file: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("PDF parser panicked")]
    Panicked,

    #[error("Extraction task failed: {0}")]
    Join(tokio::task::JoinError),
}

/// Turns a document on disk into plain text.
/// Injected into `AppState` so handlers can be exercised without real PDFs.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Default extractor backed by `pdf-extract`.
/// Best effort: scanned or image-only PDFs come back empty or whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let path: PathBuf = path.to_path_buf();

        tokio::task::spawn_blocking(move || extract_text_sync(&path))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    ExtractError::Panicked
                } else {
                    ExtractError::Join(e)
                }
            })?
    }
}

fn extract_text_sync(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Number of whitespace-delimited tokens in the extracted text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
