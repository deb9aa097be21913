use std::sync::Arc;

use crate::analysis::extract::TextExtractor;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing here needs a lock.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
