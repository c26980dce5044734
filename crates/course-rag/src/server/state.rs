//! Application state for the course RAG server

use parking_lot::RwLock;
use std::sync::Arc;

use crate::providers::{AnalyticsProvider, RagBackend, SessionProvider};

/// Shared application state
///
/// Built once at startup and cloned into every handler. Holds no request
/// state of its own; all mutable state lives behind the collaborators.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Issues session ids for requests that arrive without one
    session_provider: Arc<dyn SessionProvider>,
    /// Answers queries
    rag_backend: Arc<dyn RagBackend>,
    /// Reports course statistics
    analytics_provider: Arc<dyn AnalyticsProvider>,
    /// Ready state
    ready: RwLock<bool>,
}

impl AppState {
    /// Create new application state (ready immediately)
    pub fn new(
        session_provider: Arc<dyn SessionProvider>,
        rag_backend: Arc<dyn RagBackend>,
        analytics_provider: Arc<dyn AnalyticsProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                session_provider,
                rag_backend,
                analytics_provider,
                ready: RwLock::new(true),
            }),
        }
    }

    /// Get session provider
    pub fn session_provider(&self) -> &Arc<dyn SessionProvider> {
        &self.inner.session_provider
    }

    /// Get RAG backend
    pub fn rag_backend(&self) -> &Arc<dyn RagBackend> {
        &self.inner.rag_backend
    }

    /// Get analytics provider
    pub fn analytics_provider(&self) -> &Arc<dyn AnalyticsProvider> {
        &self.inner.analytics_provider
    }

    /// Check if the server is ready
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Set ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }
}
