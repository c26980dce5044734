//! RAG backend trait for answering course queries

use async_trait::async_trait;
use crate::error::Result;
use crate::types::RagAnswer;

/// Trait for answering a query within a conversation session
///
/// Implementations:
/// - `OllamaRagBackend`: local Ollama server grounded on the course catalog
#[async_trait]
pub trait RagBackend: Send + Sync {
    /// Answer `query` in the context of `session_id`
    async fn query(&self, query: &str, session_id: &str) -> Result<RagAnswer>;
}
