//! In-memory course catalog loaded from a docs folder

use async_trait::async_trait;
use parking_lot::RwLock;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::providers::AnalyticsProvider;
use crate::types::{Course, CourseAnalytics};

use super::parser::parse_course_document;

/// File extensions read as course documents
const COURSE_EXTENSIONS: &[&str] = &["txt", "md"];

/// Course registry keyed by title, in insertion order
#[derive(Default)]
pub struct CourseCatalog {
    courses: RwLock<Vec<Course>>,
}

impl CourseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course
    ///
    /// Returns `false` and leaves the catalog unchanged when a course with the
    /// same title is already registered.
    pub fn add_course(&self, course: Course) -> bool {
        let mut courses = self.courses.write();
        if courses.iter().any(|c| c.title == course.title) {
            return false;
        }
        courses.push(course);
        true
    }

    /// Load every course document in `path` (non-recursive)
    ///
    /// Returns `(courses_added, lessons_added)`. Unreadable files are skipped
    /// with a warning; a missing or non-directory path is an error.
    pub fn add_course_folder(&self, path: &Path, clear_existing: bool) -> Result<(usize, usize)> {
        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Docs folder not found: {}", path.display()),
            )));
        }

        if clear_existing {
            tracing::info!("Clearing existing courses before loading {}", path.display());
            self.clear();
        }

        let mut courses_added = 0;
        let mut lessons_added = 0;

        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };

            let file_path = entry.path();
            let is_course_file = entry.file_type().is_file()
                && file_path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| COURSE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
            if !is_course_file {
                continue;
            }

            let content = match std::fs::read_to_string(file_path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Error processing {}: {}", file_path.display(), e);
                    continue;
                }
            };

            let fallback_title = file_path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            let course = parse_course_document(&content, &fallback_title);
            let lesson_count = course.lessons.len();
            let title = course.title.clone();

            if self.add_course(course) {
                tracing::debug!("Added course '{}' with {} lessons", title, lesson_count);
                courses_added += 1;
                lessons_added += lesson_count;
            } else {
                tracing::debug!("Course already exists: {} - skipping", title);
            }
        }

        Ok((courses_added, lessons_added))
    }

    /// Remove all courses
    pub fn clear(&self) {
        self.courses.write().clear();
    }

    pub fn course_count(&self) -> usize {
        self.courses.read().len()
    }

    pub fn course_titles(&self) -> Vec<String> {
        self.courses.read().iter().map(|c| c.title.clone()).collect()
    }

    /// Outline of every course, for grounding prompts
    pub fn outline(&self) -> String {
        self.courses
            .read()
            .iter()
            .map(Course::outline)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Titles of courses named in any of `texts` (case-insensitive), in catalog order
    pub fn titles_mentioned_in(&self, texts: &[&str]) -> Vec<String> {
        let haystacks: Vec<String> = texts.iter().map(|t| t.to_lowercase()).collect();
        self.courses
            .read()
            .iter()
            .filter(|c| {
                let title = c.title.to_lowercase();
                haystacks.iter().any(|h| h.contains(&title))
            })
            .map(|c| c.title.clone())
            .collect()
    }

    /// Snapshot of the catalog statistics
    pub fn analytics(&self) -> CourseAnalytics {
        let courses = self.courses.read();
        CourseAnalytics {
            total_courses: courses.len(),
            course_titles: courses.iter().map(|c| c.title.clone()).collect(),
        }
    }
}

#[async_trait]
impl AnalyticsProvider for CourseCatalog {
    async fn get_course_analytics(&self) -> Result<CourseAnalytics> {
        Ok(self.analytics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_course(dir: &Path, file: &str, title: &str, lessons: usize) {
        let mut content = format!(
            "Course Title: {title}\nCourse Link: https://example.com/{file}\nCourse Instructor: Test Instructor\n\n"
        );
        for i in 0..lessons {
            content.push_str(&format!("Lesson {i}: Part {i}\nLesson Link: https://example.com/{i}\nBody {i}\n\n"));
        }
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_add_course_folder() {
        let dir = tempfile::tempdir().unwrap();
        write_course(dir.path(), "Course_A.txt", "Course_A", 2);
        write_course(dir.path(), "Course_B.txt", "Course_B", 3);
        fs::write(dir.path().join("notes.json"), "{}").unwrap();

        let catalog = CourseCatalog::new();
        let (courses, lessons) = catalog.add_course_folder(dir.path(), false).unwrap();

        assert_eq!((courses, lessons), (2, 5));
        assert_eq!(catalog.course_titles(), vec!["Course_A", "Course_B"]);
    }

    #[test]
    fn test_reload_skips_existing_titles() {
        let dir = tempfile::tempdir().unwrap();
        write_course(dir.path(), "a.txt", "Course_A", 1);

        let catalog = CourseCatalog::new();
        assert_eq!(catalog.add_course_folder(dir.path(), false).unwrap(), (1, 1));
        assert_eq!(catalog.add_course_folder(dir.path(), false).unwrap(), (0, 0));
        assert_eq!(catalog.course_count(), 1);

        assert_eq!(catalog.add_course_folder(dir.path(), true).unwrap(), (1, 1));
        assert_eq!(catalog.course_count(), 1);
    }

    #[test]
    fn test_missing_folder_is_error() {
        let catalog = CourseCatalog::new();
        let err = catalog
            .add_course_folder(Path::new("/nonexistent/docs"), false)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_titles_mentioned_in() {
        let catalog = CourseCatalog::new();
        catalog.add_course(Course::new("Building Towards Computer Use"));
        catalog.add_course(Course::new("MCP: Build Rich-Context AI Apps"));

        assert_eq!(
            catalog.titles_mentioned_in(&["what is in building towards computer use?", ""]),
            vec!["Building Towards Computer Use"]
        );
        assert!(catalog.titles_mentioned_in(&["unrelated"]).is_empty());
    }

    #[tokio::test]
    async fn test_analytics() {
        let catalog = CourseCatalog::new();
        catalog.add_course(Course::new("Test Course"));
        catalog.add_course(Course::new("Another Course"));
        assert!(!catalog.add_course(Course::new("Test Course")));

        let analytics = catalog.get_course_analytics().await.unwrap();
        assert_eq!(analytics.total_courses, 2);
        assert_eq!(analytics.course_titles, vec!["Test Course", "Another Course"]);
    }
}
