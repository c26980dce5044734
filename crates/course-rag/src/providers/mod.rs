//! Collaborator abstractions for sessions, answer generation, and analytics
//!
//! The HTTP layer only talks to these traits. The server binary wires the
//! in-memory session manager, the course catalog, and the Ollama backend;
//! tests substitute doubles.

pub mod analytics;
pub mod ollama;
pub mod rag;
pub mod session;

pub use analytics::AnalyticsProvider;
pub use ollama::OllamaRagBackend;
pub use rag::RagBackend;
pub use session::SessionProvider;
