//! Course document loading

mod catalog;
mod parser;

pub use catalog::CourseCatalog;
pub use parser::parse_course_document;
