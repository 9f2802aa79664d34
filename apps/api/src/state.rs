use std::sync::Arc;

use crate::config::Config;
use crate::emphasis::KeywordCatalog;
use crate::llm_client::TextGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Production: `LlmClient`; tests swap in a fake.
    pub generator: Arc<dyn TextGenerator>,
    /// Read-only keyword catalog, built once at startup.
    pub catalog: Arc<KeywordCatalog>,
    pub sessions: SessionStore,
    pub config: Config,
}
