//! Course records and their category/difficulty vocabulary
//!
//! A course is a titled, ordered sequence of lessons. The catalog
//! serializes courses as YAML or JSON with human-readable enum tags
//! ("Personal Development", "Beginner"), so the serde names here are
//! the display names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::Lesson;

/// A course in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Opaque identity, assigned at creation and immutable thereafter
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Course title
    pub title: String,

    /// Longer free-text description
    pub description: String,

    /// Instructor display name
    pub instructor: String,

    /// Subject category
    pub category: CourseCategory,

    /// Difficulty level
    pub difficulty: CourseDifficulty,

    /// Advertised duration in minutes. Independent of the summed
    /// lesson durations; see [`Course::lesson_minutes`] for the
    /// derived figure.
    pub estimated_duration: u32,

    /// Ordered lessons. Lesson numbering derives from position.
    #[serde(default)]
    pub lessons: Vec<Lesson>,

    /// Optional thumbnail image URL
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl Course {
    /// Sum of the lesson durations in minutes
    pub fn lesson_minutes(&self) -> u32 {
        self.lessons.iter().map(|l| l.duration).sum()
    }

    /// Fraction of lessons completed, in `0.0..=1.0`
    ///
    /// A course with no lessons reports zero progress.
    pub fn progress(&self) -> f64 {
        if self.lessons.is_empty() {
            return 0.0;
        }
        let done = self.lessons.iter().filter(|l| l.is_completed).count();
        done as f64 / self.lessons.len() as f64
    }

    /// Whether every lesson has been completed
    pub fn is_completed(&self) -> bool {
        !self.lessons.is_empty() && self.lessons.iter().all(|l| l.is_completed)
    }

    /// Truncate description to first line
    pub fn short_description(&self) -> &str {
        self.description
            .lines()
            .next()
            .unwrap_or(&self.description)
            .trim()
    }
}

/// Subject category of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseCategory {
    Programming,
    Design,
    Business,
    Marketing,
    #[serde(rename = "Personal Development")]
    PersonalDevelopment,
}

impl CourseCategory {
    /// All categories, in display order
    pub const ALL: [CourseCategory; 5] = [
        CourseCategory::Programming,
        CourseCategory::Design,
        CourseCategory::Business,
        CourseCategory::Marketing,
        CourseCategory::PersonalDevelopment,
    ];

    /// Display name, matching the serialized tag
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseCategory::Programming => "Programming",
            CourseCategory::Design => "Design",
            CourseCategory::Business => "Business",
            CourseCategory::Marketing => "Marketing",
            CourseCategory::PersonalDevelopment => "Personal Development",
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseCategory {
    type Err = String;

    /// Parse a category name, case-insensitive, accepting spaces or
    /// dashes in multi-word names ("personal-development")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .iter()
            .find(|c| c.as_str().to_lowercase() == normalized)
            .copied()
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}'. Valid categories: {}",
                    s,
                    Self::ALL.map(|c| c.as_str()).join(", ")
                )
            })
    }
}

/// Difficulty level of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseDifficulty {
    /// All difficulty levels, easiest first
    pub const ALL: [CourseDifficulty; 3] = [
        CourseDifficulty::Beginner,
        CourseDifficulty::Intermediate,
        CourseDifficulty::Advanced,
    ];

    /// Display name, matching the serialized tag
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseDifficulty::Beginner => "Beginner",
            CourseDifficulty::Intermediate => "Intermediate",
            CourseDifficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for CourseDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|d| d.as_str().to_lowercase() == normalized)
            .copied()
            .ok_or_else(|| {
                format!(
                    "Unknown difficulty '{}'. Valid levels: {}",
                    s,
                    Self::ALL.map(|d| d.as_str()).join(", ")
                )
            })
    }
}
