//! Query request types

use serde::{Deserialize, Serialize};

/// Query request for the course RAG system
///
/// `query` is forwarded to the backend verbatim: empty and very long text are
/// both accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question to answer
    pub query: String,

    /// Existing conversation session (optional)
    #[serde(default)]
    pub session_id: Option<String>,
}

impl QueryRequest {
    /// Create a new query without a session
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            session_id: None,
        }
    }

    /// Attach an existing session
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Split into the query text and the session reference
    pub fn into_parts(self) -> (String, SessionRef) {
        (self.query, SessionRef::from(self.session_id))
    }
}

/// How a request refers to its conversation session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRef {
    /// Caller supplied a non-empty session id
    Provided(String),
    /// No usable session id; a new one must be issued
    Absent,
}

impl From<Option<String>> for SessionRef {
    /// `None` and the empty string are both `Absent`
    fn from(session_id: Option<String>) -> Self {
        match session_id {
            Some(id) if !id.is_empty() => Self::Provided(id),
            _ => Self::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ref_from_option() {
        assert_eq!(
            SessionRef::from(Some("test-session".to_string())),
            SessionRef::Provided("test-session".to_string())
        );
        assert_eq!(SessionRef::from(None), SessionRef::Absent);
        assert_eq!(SessionRef::from(Some(String::new())), SessionRef::Absent);
    }

    #[test]
    fn test_whitespace_session_is_kept() {
        // Only the empty string is treated as missing
        assert_eq!(
            SessionRef::from(Some(" ".to_string())),
            SessionRef::Provided(" ".to_string())
        );
    }

    #[test]
    fn test_deserialize_optional_session() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"query": "Tell me about lesson 1"}"#).unwrap();
        assert_eq!(request.query, "Tell me about lesson 1");
        assert!(request.session_id.is_none());

        let request: QueryRequest =
            serde_json::from_str(r#"{"query": "", "session_id": null}"#).unwrap();
        assert_eq!(request.into_parts(), (String::new(), SessionRef::Absent));
    }

    #[test]
    fn test_deserialize_rejects_missing_query() {
        assert!(serde_json::from_str::<QueryRequest>(r#"{"session_id": "test"}"#).is_err());
        assert!(serde_json::from_str::<QueryRequest>(r#"{"query": 42}"#).is_err());
    }

    #[test]
    fn test_builder() {
        let (query, session) = QueryRequest::new("What is MCP?")
            .with_session("session_3")
            .into_parts();
        assert_eq!(query, "What is MCP?");
        assert_eq!(session, SessionRef::Provided("session_3".to_string()));
    }
}
