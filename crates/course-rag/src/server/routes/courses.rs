//! Course statistics endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::CourseStats;

/// GET /api/courses - Course analytics and statistics
///
/// Takes no parameters; any query string is ignored.
pub async fn get_course_stats(State(state): State<AppState>) -> Result<Json<CourseStats>> {
    let analytics = state.analytics_provider().get_course_analytics().await?;

    tracing::debug!("Course stats: {} courses", analytics.total_courses);

    Ok(Json(CourseStats::from(analytics)))
}
