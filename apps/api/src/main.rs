mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::extract::PdfTextExtractor;
use crate::config::Config;
use crate::llm_client::{LlmClient, LlmConfig};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    if !config.api_configured() {
        warn!("GROQ_API_KEY is not set; /analyze will fail until a key is configured");
    }

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create upload directory {}",
                config.upload_dir.display()
            )
        })?;
    info!("Upload directory: {}", config.upload_dir.display());

    // Initialize LLM client
    let llm = LlmClient::new(LlmConfig {
        api_url: config.groq_api_url.clone(),
        api_key: config.groq_api_key.clone(),
        model: config.groq_model.clone(),
        timeout: config.llm_timeout,
    })
    .context("Failed to build HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    let state = AppState {
        llm,
        config: config.clone(),
        extractor: Arc::new(PdfTextExtractor),
    };

    // Browser front-end is served from a different origin.
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;
    info!("Listening on {addr}");
    info!("Upload endpoint: http://{addr}/analyze");

    axum::serve(listener, app).await?;

    Ok(())
}
