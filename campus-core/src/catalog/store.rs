//! Catalog store - the per-session course list
//!
//! Populated once at session start from a [`CourseSource`], then held
//! read-only apart from lesson completion flags. `load` takes `&mut
//! self` and resolves fully before returning, so queries never observe
//! a partially loaded catalog.

use thiserror::Error;
use uuid::Uuid;

use crate::model::Course;
use crate::source::{CourseSource, FetchError};

use super::CourseFilter;

/// Catalog lookup and update errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Course not found in catalog: {0}")]
    CourseNotFound(Uuid),

    #[error("Lesson {lesson_id} not found in course {course_id}")]
    LessonNotFound { course_id: Uuid, lesson_id: Uuid },
}

/// Holds the loaded course list and exposes it for querying
#[derive(Debug, Default)]
pub struct CatalogStore {
    courses: Vec<Course>,
    loaded: bool,
}

impl CatalogStore {
    /// An empty, not-yet-loaded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from a course source
    ///
    /// Delegates to the source and, on success, replaces the held
    /// sequence. A failed fetch leaves the previous contents in place
    /// and is terminal for this attempt; there is no retry.
    pub async fn load(&mut self, source: &dyn CourseSource) -> Result<(), FetchError> {
        tracing::debug!("Loading course catalog from '{}' source", source.name());

        let courses = source.fetch_courses().await.map_err(|e| {
            tracing::warn!("Catalog load from '{}' failed: {}", source.name(), e);
            e
        })?;

        tracing::info!(
            "Catalog loaded: {} course(s) from '{}'",
            courses.len(),
            source.name()
        );

        self.courses = courses;
        self.loaded = true;
        Ok(())
    }

    /// The full course sequence, in load order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Whether a load has completed successfully
    ///
    /// Distinguishes "never loaded" from "loaded an empty catalog".
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Look up a course by id
    pub fn course(&self, id: Uuid) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Look up a course by exact title, case-insensitive
    pub fn find_by_title(&self, title: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.title.eq_ignore_ascii_case(title))
    }

    /// Apply a filter to the held sequence
    ///
    /// Never fails; an empty result is a valid outcome. An unloaded
    /// store yields an empty result.
    pub fn query(&self, filter: &CourseFilter) -> Vec<&Course> {
        filter.apply(&self.courses)
    }

    /// Set a lesson's completion flag
    ///
    /// The only mutation the catalog supports after load.
    pub fn set_lesson_completed(
        &mut self,
        course_id: Uuid,
        lesson_id: Uuid,
        done: bool,
    ) -> Result<(), CatalogError> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or(CatalogError::CourseNotFound(course_id))?;

        let lesson = course
            .lessons
            .iter_mut()
            .find(|l| l.id == lesson_id)
            .ok_or(CatalogError::LessonNotFound {
                course_id,
                lesson_id,
            })?;

        lesson.is_completed = done;
        Ok(())
    }
}
