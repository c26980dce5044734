//! Error types for the course RAG service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for course RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// Course RAG service errors
///
/// Collaborator failures (`Session`, `Backend`, `Analytics`) display their bare
/// message so the HTTP `detail` carries exactly what the collaborator reported.
#[derive(Debug, Error)]
pub enum Error {
    /// Request body did not match the expected shape
    #[error("{0}")]
    Validation(String),

    /// Session provider failure
    #[error("{0}")]
    Session(String),

    /// RAG backend failure
    #[error("{0}")]
    Backend(String),

    /// Analytics provider failure
    #[error("{0}")]
    Analytics(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ollama/LLM error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a session provider error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session(message.into())
    }

    /// Create a RAG backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Create an analytics provider error
    pub fn analytics(message: impl Into<String>) -> Self {
        Self::Analytics(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error maps to
    ///
    /// Only body validation is a client error; everything raised while
    /// dispatching to a collaborator is surfaced uniformly as a server error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}
