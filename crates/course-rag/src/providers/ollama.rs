//! Ollama-backed RAG backend
//!
//! Grounds generation on the course catalog outline and the session's
//! conversation history.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::error::Result;
use crate::generation::{OllamaClient, PromptBuilder};
use crate::ingestion::CourseCatalog;
use crate::session::SessionManager;
use crate::types::RagAnswer;

use super::rag::RagBackend;

/// RAG backend answering course questions with a local Ollama model
pub struct OllamaRagBackend {
    client: OllamaClient,
    sessions: Arc<SessionManager>,
    catalog: Arc<CourseCatalog>,
}

impl OllamaRagBackend {
    /// Create a new backend sharing the given session manager and catalog
    pub fn new(
        config: &LlmConfig,
        sessions: Arc<SessionManager>,
        catalog: Arc<CourseCatalog>,
    ) -> Result<Self> {
        Ok(Self {
            client: OllamaClient::new(config)?,
            sessions,
            catalog,
        })
    }

    /// Get the underlying client
    pub fn client(&self) -> &OllamaClient {
        &self.client
    }
}

#[async_trait]
impl RagBackend for OllamaRagBackend {
    async fn query(&self, query: &str, session_id: &str) -> Result<RagAnswer> {
        let history = self.sessions.get_conversation_history(session_id);
        let prompt =
            PromptBuilder::build_course_prompt(query, &self.catalog.outline(), history.as_deref());

        let answer = self.client.generate(&prompt).await?;

        self.sessions.add_exchange(session_id, query, &answer);

        let sources = self
            .catalog
            .titles_mentioned_in(&[query, answer.as_str()])
            .into_iter()
            .map(Value::String)
            .collect();

        Ok(RagAnswer { answer, sources })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Course;
    use axum::{routing::post, Json, Router};
    use parking_lot::Mutex;
    use serde_json::json;

    /// Fake Ollama server answering every prompt with `answer`
    ///
    /// Returns the base URL and the prompts it received.
    async fn fake_ollama(answer: &'static str) -> (String, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&prompts);
        let router = Router::new().route(
            "/api/generate",
            post(move |Json(body): Json<Value>| {
                let seen = Arc::clone(&seen);
                async move {
                    seen.lock()
                        .push(body["prompt"].as_str().unwrap_or_default().to_string());
                    Json(json!({ "response": answer }))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        (format!("http://{}", addr), prompts)
    }

    fn backend(base_url: String) -> (OllamaRagBackend, Arc<SessionManager>) {
        let sessions = Arc::new(SessionManager::new(2));
        let catalog = Arc::new(CourseCatalog::new());
        catalog.add_course(Course::new("Building Towards Computer Use"));
        catalog.add_course(Course::new("MCP: Build Rich-Context AI Apps"));
        catalog.add_course(Course::new("Advanced Retrieval"));

        let config = LlmConfig {
            base_url,
            max_retries: 0,
            ..LlmConfig::default()
        };
        let backend = OllamaRagBackend::new(&config, Arc::clone(&sessions), catalog).unwrap();
        (backend, sessions)
    }

    #[tokio::test]
    async fn test_query_answers_and_records_exchange() {
        let (base_url, prompts) =
            fake_ollama(" Building Towards Computer Use covers agents. ").await;
        let (backend, sessions) = backend(base_url);

        let answer = backend
            .query("what about mcp: build rich-context ai apps?", "s1")
            .await
            .unwrap();

        assert_eq!(answer.answer, "Building Towards Computer Use covers agents.");
        // Catalog order, matched in either the question or the answer
        assert_eq!(
            answer.sources,
            vec![
                json!("Building Towards Computer Use"),
                json!("MCP: Build Rich-Context AI Apps"),
            ]
        );
        assert_eq!(
            sessions.get_conversation_history("s1").as_deref(),
            Some(
                "User: what about mcp: build rich-context ai apps?\n\
                 Assistant: Building Towards Computer Use covers agents."
            )
        );

        let prompts = prompts.lock();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Advanced Retrieval"));
        assert!(!prompts[0].contains("PREVIOUS CONVERSATION"));
    }

    #[tokio::test]
    async fn test_history_feeds_next_prompt() {
        let (base_url, prompts) = fake_ollama("Sure.").await;
        let (backend, _sessions) = backend(base_url);

        backend.query("first question", "s1").await.unwrap();
        let second = backend.query("second question", "s1").await.unwrap();
        backend.query("other session", "s2").await.unwrap();

        assert!(second.sources.is_empty());

        let prompts = prompts.lock();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[1]
            .contains("PREVIOUS CONVERSATION:\nUser: first question\nAssistant: Sure."));
        assert!(prompts[1].contains("QUESTION: second question"));
        assert!(!prompts[2].contains("PREVIOUS CONVERSATION"));
    }

    #[tokio::test]
    async fn test_generation_failure_leaves_history_untouched() {
        let (backend, sessions) = backend("http://127.0.0.1:9".to_string());

        let err = backend.query("hello", "s1").await.unwrap_err();

        assert!(matches!(err, crate::error::Error::Llm(_)));
        assert!(sessions.get_conversation_history("s1").is_none());
    }
}
