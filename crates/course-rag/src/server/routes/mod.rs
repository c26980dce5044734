//! API routes for the course RAG server

pub mod courses;
pub mod query;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Query with session handling; query text has no length limit
        .route(
            "/query",
            post(query::query_documents).layer(DefaultBodyLimit::disable()),
        )
        // Course statistics
        .route("/courses", get(courses::get_course_stats))
}
