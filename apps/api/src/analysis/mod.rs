// Résumé analysis: multipart intake, PDF text extraction, AI critique.
// All chat-completion calls go through llm_client.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod upload;
