//! Analytics provider trait for course statistics

use async_trait::async_trait;
use crate::error::Result;
use crate::types::CourseAnalytics;

/// Trait for reporting course catalog statistics
///
/// Implementations:
/// - `CourseCatalog`: courses loaded from the docs folder
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Total course count and titles
    async fn get_course_analytics(&self) -> Result<CourseAnalytics>;
}
