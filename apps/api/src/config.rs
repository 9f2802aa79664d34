use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default multipart body limit: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Draft sessions idle this long are evicted: one hour.
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 60 * 60;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// JSON keyword catalog; the built-in catalog is used when unset.
    pub keyword_catalog_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
    pub session_idle_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            keyword_catalog_path: optional_env("KEYWORD_CATALOG_PATH").map(PathBuf::from),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            session_idle_ttl: Duration::from_secs(match optional_env("SESSION_IDLE_TTL_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("SESSION_IDLE_TTL_SECS must be a number of seconds")?,
                None => DEFAULT_SESSION_IDLE_TTL_SECS,
            }),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank are treated alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
