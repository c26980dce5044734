//! Response types for course queries and statistics

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::course::CourseAnalytics;

/// Answer produced by a RAG backend
///
/// Sources are kept as raw JSON values; they are coerced to strings only when
/// the HTTP response is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RagAnswer {
    /// Generated answer text
    pub answer: String,
    /// Ordered source citations
    pub sources: Vec<Value>,
}

impl RagAnswer {
    /// Create an answer with string sources
    pub fn new<I, S>(answer: impl Into<String>, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answer: answer.into(),
            sources: sources
                .into_iter()
                .map(|s| Value::String(s.into()))
                .collect(),
        }
    }
}

/// Response from a course query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Generated answer
    pub answer: String,
    /// Source citations, in backend order
    pub sources: Vec<String>,
    /// Session the answer belongs to
    pub session_id: String,
}

impl QueryResponse {
    /// Build the response from a backend answer and the resolved session
    pub fn new(rag_answer: RagAnswer, session_id: String) -> Self {
        Self {
            answer: rag_answer.answer,
            sources: rag_answer.sources.into_iter().map(source_to_string).collect(),
            session_id,
        }
    }
}

/// Coerce a source citation to its string form
fn source_to_string(source: Value) -> String {
    match source {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Course statistics response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseStats {
    /// Number of courses in the catalog
    pub total_courses: usize,
    /// Course titles, in catalog order
    pub course_titles: Vec<String>,
}

impl From<CourseAnalytics> for CourseStats {
    fn from(analytics: CourseAnalytics) -> Self {
        Self {
            total_courses: analytics.total_courses,
            course_titles: analytics.course_titles,
        }
    }
}
