use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Value shipped in the sample `.env`; treated the same as an unset key.
pub const API_KEY_PLACEHOLDER: &str = "your-groq-api-key-here";

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Application configuration loaded from environment variables.
/// Every value has a default; only malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when `GROQ_API_KEY` is unset, empty, or still the placeholder.
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub groq_model: String,
    pub llm_timeout: Duration,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: usable_api_key(std::env::var("GROQ_API_KEY").ok()),
            groq_api_url: env_or("GROQ_API_URL", DEFAULT_API_URL),
            groq_model: env_or("GROQ_MODEL", DEFAULT_MODEL),
            llm_timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", 30)?),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env("PORT", 5000)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn api_configured(&self) -> bool {
        self.groq_api_key.is_some()
    }
}

/// Filters out credentials that cannot possibly authenticate.
pub fn usable_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != API_KEY_PLACEHOLDER)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_key_is_not_usable() {
        assert_eq!(usable_api_key(None), None);
    }

    #[test]
    fn test_placeholder_key_is_not_usable() {
        assert_eq!(usable_api_key(Some(API_KEY_PLACEHOLDER.to_string())), None);
        assert_eq!(usable_api_key(Some("  ".to_string())), None);
    }

    #[test]
    fn test_real_key_is_kept_trimmed() {
        assert_eq!(
            usable_api_key(Some(" gsk_abc123 \n".to_string())),
            Some("gsk_abc123".to_string())
        );
    }

    #[test]
    fn test_parse_env_falls_back_to_default_when_unset() {
        let port: u16 = parse_env("RESUME_ANALYZER_TEST_UNSET_PORT", 5000).unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn test_parse_env_rejects_malformed_number_naming_the_key() {
        std::env::set_var("RESUME_ANALYZER_TEST_BAD_PORT", "abc");

        let err = parse_env::<u16>("RESUME_ANALYZER_TEST_BAD_PORT", 5000).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("RESUME_ANALYZER_TEST_BAD_PORT"), "{message}");
        assert!(message.contains("abc"), "{message}");
    }
}
