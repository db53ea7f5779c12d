use std::sync::Arc;

use crate::interview::session_store::SessionStore;
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory session registry. Lost on restart.
    pub sessions: SessionStore,
    /// The oracle. `GeminiClient` in production, a scripted model in tests.
    pub llm: Arc<dyn LanguageModel>,
}
