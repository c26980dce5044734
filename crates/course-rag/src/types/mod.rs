//! Core types for the course RAG service

pub mod course;
pub mod query;
pub mod response;

pub use course::{Course, CourseAnalytics, Lesson};
pub use query::{QueryRequest, SessionRef};
pub use response::{CourseStats, QueryResponse, RagAnswer};
