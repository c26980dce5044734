//! In-memory session manager with bounded conversation history

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::providers::SessionProvider;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Session registry keeping the last `max_history` exchanges per session
pub struct SessionManager {
    /// Messages per session, oldest first
    sessions: DashMap<String, Vec<Message>>,
    /// Last issued session number
    counter: AtomicU64,
    /// Exchanges remembered per session
    max_history: usize,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(max_history: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            counter: AtomicU64::new(0),
            max_history,
        }
    }

    /// Start a new empty session and return its id (`session_<n>`)
    pub fn start_session(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let session_id = format!("session_{}", n);
        self.sessions.insert(session_id.clone(), Vec::new());
        tracing::debug!("Created session {}", session_id);
        session_id
    }

    /// Append a message, creating the session if it is unknown
    pub fn add_message(&self, session_id: &str, role: Role, content: &str) {
        let mut messages = self.sessions.entry(session_id.to_string()).or_default();
        messages.push(Message {
            role,
            content: content.to_string(),
        });

        let limit = self.max_history * 2;
        if messages.len() > limit {
            let excess = messages.len() - limit;
            messages.drain(..excess);
        }
    }

    /// Record a user question and the assistant's answer
    pub fn add_exchange(&self, session_id: &str, user_message: &str, assistant_message: &str) {
        self.add_message(session_id, Role::User, user_message);
        self.add_message(session_id, Role::Assistant, assistant_message);
    }

    /// Conversation history formatted for a prompt
    ///
    /// Returns `None` for unknown sessions and sessions without messages.
    pub fn get_conversation_history(&self, session_id: &str) -> Option<String> {
        let messages = self.sessions.get(session_id)?;
        if messages.is_empty() {
            return None;
        }

        Some(
            messages
                .iter()
                .map(|m| format!("{}: {}", m.role.label(), m.content))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Messages of a session, oldest first
    pub fn messages(&self, session_id: &str) -> Vec<Message> {
        self.sessions
            .get(session_id)
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Forget all messages of a session
    pub fn clear_session(&self, session_id: &str) {
        if let Some(mut messages) = self.sessions.get_mut(session_id) {
            messages.clear();
        }
    }

    /// Number of known sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(2)
    }
}

#[async_trait]
impl SessionProvider for SessionManager {
    async fn create_session(&self) -> Result<String> {
        Ok(self.start_session())
    }
}
