//! course-rag: query and session contract layer for a course materials RAG system
//!
//! The HTTP layer binds each query to a conversation session, delegates to
//! pluggable collaborators (session provider, RAG backend, analytics provider),
//! and maps their results and failures to a fixed JSON contract.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod server;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use server::{build_router, state::AppState, RagServer};
pub use types::{
    course::{Course, CourseAnalytics, Lesson},
    query::{QueryRequest, SessionRef},
    response::{CourseStats, QueryResponse, RagAnswer},
};
