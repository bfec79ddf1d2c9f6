use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatBackend;
use crate::skills::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled once at startup; read-only afterwards.
    pub extractor: Arc<SkillExtractor>,
    /// `None` when no API key is configured.
    pub llm: Option<Arc<dyn ChatBackend>>,
}
