use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Completion backend. `LlmClient` in production, a fake in tests.
    pub llm: Arc<dyn ChatCompletion>,
}
