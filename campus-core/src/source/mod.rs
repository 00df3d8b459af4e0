//! Course sources - where a session's catalog comes from
//!
//! The catalog store is populated once per session from a
//! [`CourseSource`] collaborator. Three implementations are provided:
//!
//! - [`MockCourseSource`]: in-memory fixture data, optionally with
//!   simulated latency
//! - [`FileCourseSource`]: a YAML catalog file on disk
//! - `HttpCourseSource`: a remote JSON endpoint (behind the `remote`
//!   feature)
//!
//! A failed fetch is terminal for that load attempt; there is no retry,
//! paging or caching layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Course;

mod file;
mod mock;

#[cfg(feature = "remote")]
mod http;

pub use file::FileCourseSource;
pub use mock::{sample_courses, MockCourseSource};

#[cfg(feature = "remote")]
pub use http::HttpCourseSource;

/// A catalog load failure
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read course catalog from {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse course catalog: {0}")]
    Parse(String),

    #[cfg(feature = "remote")]
    #[error("Failed to fetch course catalog from {url}: {reason}")]
    Http { url: String, reason: String },

    #[error("Course source unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Trait for course catalog providers
///
/// Implementations handle the specifics of where course data lives
/// while presenting a unified interface to the catalog store.
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Fetch the full course sequence for this session
    ///
    /// Resolves once with the complete catalog or fails with a
    /// terminal [`FetchError`].
    async fn fetch_courses(&self) -> Result<Vec<Course>, FetchError>;

    /// Source identifier for logging
    fn name(&self) -> &'static str;
}
