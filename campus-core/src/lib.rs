//! Campus core library exports

pub mod auth;
pub mod catalog;
pub mod model;
pub mod source;

pub use catalog::{CatalogError, CatalogStore, CourseFilter};
pub use model::{Course, CourseCategory, CourseDifficulty, Lesson, LessonType};
pub use source::{CourseSource, FetchError};
