use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Production rewrite oracle — handlers pass it to the suggestion engine
    /// as `&dyn RewriteOracle`.
    pub llm: LlmClient,
    /// Kept for handlers that need runtime settings.
    #[allow(dead_code)]
    pub config: Config,
}
