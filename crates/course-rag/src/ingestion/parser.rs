//! Course document header parser
//!
//! Course files start with a metadata header followed by lesson sections:
//!
//! ```text
//! Course Title: Test Course
//! Course Link: https://example.com/course
//! Course Instructor: Test Instructor
//!
//! Lesson 0: Introduction
//! Lesson Link: https://example.com/lesson0
//! ...lesson body...
//! ```
//!
//! Only the header and lesson markers are read; lesson bodies are skipped.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::{Course, Lesson};

fn lesson_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^Lesson\s+(\d+):\s*(.*)$").expect("Invalid lesson regex")
    })
}

/// Value after a `Label:` prefix, matched case-insensitively
fn field<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let prefix = line.get(..label.len())?;
    if !prefix.eq_ignore_ascii_case(label) {
        return None;
    }
    line[label.len()..]
        .trim_start()
        .strip_prefix(':')
        .map(str::trim)
}

/// Parse a course document
///
/// `fallback_title` is used when the document has no `Course Title:` line.
pub fn parse_course_document(content: &str, fallback_title: &str) -> Course {
    let mut course = Course::new(fallback_title);
    let mut has_title = false;
    // Set once the first lesson marker is seen, valid or not
    let mut in_lessons = false;
    // Last marker was rejected; its link must not land on the previous lesson
    let mut skipped_marker = false;

    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = lesson_pattern().captures(line) {
            in_lessons = true;
            match caps[1].parse::<u32>() {
                Ok(lesson_number) => {
                    skipped_marker = false;
                    course.lessons.push(Lesson {
                        lesson_number,
                        title: caps[2].trim().to_string(),
                        lesson_link: None,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping lesson marker in '{}' with invalid number {}: {}",
                        course.title,
                        &caps[1],
                        e
                    );
                    skipped_marker = true;
                }
            }
        } else if let Some(link) = field(line, "Lesson Link") {
            if skipped_marker {
                continue;
            }
            if let Some(lesson) = course.lessons.last_mut() {
                if lesson.lesson_link.is_none() && !link.is_empty() {
                    lesson.lesson_link = Some(link.to_string());
                }
            }
        } else if in_lessons {
            // Past the header: lesson body text
            continue;
        } else if let Some(title) = field(line, "Course Title") {
            if !has_title && !title.is_empty() {
                course.title = title.to_string();
                has_title = true;
            }
        } else if let Some(link) = field(line, "Course Link") {
            if !link.is_empty() {
                course.course_link = Some(link.to_string());
            }
        } else if let Some(instructor) = field(line, "Course Instructor") {
            if !instructor.is_empty() {
                course.instructor = Some(instructor.to_string());
            }
        }
    }

    course
}
