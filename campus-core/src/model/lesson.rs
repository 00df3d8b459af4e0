//! Lessons and their attached resources

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single lesson within a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Lesson title
    pub title: String,

    /// Lesson body text
    pub content: String,

    /// Duration in minutes
    pub duration: u32,

    /// Delivery format
    pub lesson_type: LessonType,

    /// Completion flag. The only field that stays mutable after the
    /// catalog is loaded.
    #[serde(default)]
    pub is_completed: bool,

    /// Video URL for video lessons
    #[serde(default)]
    pub video_url: Option<String>,

    /// Supplementary materials
    #[serde(default)]
    pub resources: Vec<LessonResource>,
}

/// Delivery format of a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonType {
    Video,
    Reading,
    Quiz,
    Assignment,
}

impl LessonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonType::Video => "Video",
            LessonType::Reading => "Reading",
            LessonType::Quiz => "Quiz",
            LessonType::Assignment => "Assignment",
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supplementary material attached to a lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonResource {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub title: String,

    pub url: String,

    pub resource_type: ResourceType,
}

/// Kind of lesson resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    #[serde(rename = "PDF")]
    Pdf,
    Link,
    Download,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Pdf => "PDF",
            ResourceType::Link => "Link",
            ResourceType::Download => "Download",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod lesson_tests {
    use super::*;

    #[test]
    fn test_lesson_yaml_roundtrip() {
        let yaml = r#"
title: Introduction to SwiftUI
content: Learn the fundamentals of declarative UI programming.
duration: 20
lesson_type: Video
video_url: https://example.com/swiftui-intro
resources:
  - title: SwiftUI Cheat Sheet
    url: https://example.com/cheatsheet
    resource_type: PDF
  - title: Sample Code
    url: https://github.com/example/swiftui-samples
    resource_type: Link
"#;
        let lesson: Lesson = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(lesson.lesson_type, LessonType::Video);
        assert!(!lesson.is_completed);
        assert_eq!(lesson.resources.len(), 2);
        assert_eq!(lesson.resources[0].resource_type, ResourceType::Pdf);

        let back = serde_yaml_ng::to_string(&lesson).unwrap();
        assert!(back.contains("resource_type: PDF"));
    }

    #[test]
    fn test_lesson_type_display() {
        assert_eq!(LessonType::Quiz.to_string(), "Quiz");
        assert_eq!(ResourceType::Pdf.to_string(), "PDF");
    }
}
