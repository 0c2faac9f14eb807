//! The rewrite oracle seam — the suggestion engine's only external boundary.

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::LlmClient;

/// The external text-rewriting capability the suggestion engine consumes.
///
/// `None` covers both oracle failure and empty output; the engine treats
/// either as "no suggestion" and keeps going. Retry/backoff policy belongs
/// to the implementation, never to the engine.
#[async_trait]
pub trait RewriteOracle: Send + Sync {
    async fn rewrite(&self, text: &str, instruction: &str) -> Option<String>;
}

/// Production oracle: the shared Anthropic client. Hard faults are absorbed
/// here so the engine's contract stays infallible.
#[async_trait]
impl RewriteOracle for LlmClient {
    async fn rewrite(&self, text: &str, instruction: &str) -> Option<String> {
        match self.rewrite_text(text, instruction).await {
            Ok(improved) => Some(improved),
            Err(e) => {
                warn!("Rewrite call failed, skipping this suggestion: {e}");
                None
            }
        }
    }
}
