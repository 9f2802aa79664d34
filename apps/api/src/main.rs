mod assembly;
mod config;
mod drafts;
mod emphasis;
mod errors;
mod extraction;
mod generation;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::emphasis::KeywordCatalog;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cover Letter API v{}", env!("CARGO_PKG_VERSION"));

    // Keyword catalog: file if configured, built-in otherwise
    let catalog = match &config.keyword_catalog_path {
        Some(path) => KeywordCatalog::from_json_file(path)?,
        None => KeywordCatalog::default(),
    };
    info!(
        "Keyword catalog loaded: {} group(s), {} keyword(s)",
        catalog.groups().len(),
        catalog.len()
    );
    if catalog.is_empty() {
        warn!("Keyword catalog is empty; only the company name will be emphasized");
    }

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Sessions live in memory; idle ones are swept in the background
    let sessions = SessionStore::new();
    let _sweeper = sessions.spawn_idle_sweeper(config.session_idle_ttl);
    info!(
        "Draft sessions expire after {}s idle",
        config.session_idle_ttl.as_secs()
    );

    // Build app state
    let state = AppState {
        generator: Arc::new(llm),
        catalog: Arc::new(catalog),
        sessions,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the form frontend has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
