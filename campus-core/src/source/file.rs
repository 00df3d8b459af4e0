//! Course source backed by a YAML catalog file

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::model::Course;

use super::{CourseSource, FetchError};

/// Reads a course catalog from a YAML file on disk
///
/// The file holds a plain sequence of courses. Parsing is strict: a
/// malformed catalog fails the whole load rather than serving a
/// partial sequence.
pub struct FileCourseSource {
    path: PathBuf,
}

impl FileCourseSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CourseSource for FileCourseSource {
    async fn fetch_courses(&self) -> Result<Vec<Course>, FetchError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        let courses: Vec<Course> = serde_yaml_ng::from_str(&content)
            .map_err(|e| FetchError::Parse(format!("{}: {e}", self.path.display())))?;

        tracing::debug!(
            "Loaded {} course(s) from {}",
            courses.len(),
            self.path.display()
        );

        Ok(courses)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
