//! Course catalog types

use serde::{Deserialize, Serialize};

/// A course and its lesson outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course title (unique within a catalog)
    pub title: String,
    /// Link to the course page
    pub course_link: Option<String>,
    /// Course instructor
    pub instructor: Option<String>,
    /// Lessons in document order
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Create a course with no lessons
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            course_link: None,
            instructor: None,
            lessons: Vec::new(),
        }
    }

    /// Format the course as a short outline for prompts
    pub fn outline(&self) -> String {
        let mut outline = format!("Course: {}", self.title);
        if let Some(instructor) = &self.instructor {
            outline.push_str(&format!(" (Instructor: {})", instructor));
        }
        if let Some(link) = &self.course_link {
            outline.push_str(&format!("\nLink: {}", link));
        }
        for lesson in &self.lessons {
            outline.push_str(&format!("\n  Lesson {}: {}", lesson.lesson_number, lesson.title));
        }
        outline
    }
}

/// A single lesson within a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub lesson_number: u32,
    pub title: String,
    pub lesson_link: Option<String>,
}

/// Aggregate catalog statistics reported by an analytics provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseAnalytics {
    pub total_courses: usize,
    pub course_titles: Vec<String>,
}
