//! In-memory course source with built-in sample data

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{
    Course, CourseCategory, CourseDifficulty, Lesson, LessonResource, LessonType, ResourceType,
};

use super::{CourseSource, FetchError};

/// Course source backed by an in-memory list
///
/// Serves either caller-supplied courses or the built-in sample
/// catalog. An optional artificial delay lets consumers exercise the
/// async load path the way a real backend would behave.
pub struct MockCourseSource {
    courses: Vec<Course>,
    delay: Option<Duration>,
}

impl MockCourseSource {
    /// Source serving the given courses with no delay
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            delay: None,
        }
    }

    /// Source serving the built-in sample catalog
    pub fn with_sample_catalog() -> Self {
        Self::new(sample_courses())
    }

    /// Add an artificial delay before the fetch resolves
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl CourseSource for MockCourseSource {
    async fn fetch_courses(&self) -> Result<Vec<Course>, FetchError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.courses.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

fn lesson(
    title: &str,
    content: &str,
    duration: u32,
    lesson_type: LessonType,
    video_url: Option<&str>,
    resources: Vec<LessonResource>,
) -> Lesson {
    Lesson {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        duration,
        lesson_type,
        is_completed: false,
        video_url: video_url.map(str::to_string),
        resources,
    }
}

fn resource(title: &str, url: &str, resource_type: ResourceType) -> LessonResource {
    LessonResource {
        id: Uuid::new_v4(),
        title: title.to_string(),
        url: url.to_string(),
        resource_type,
    }
}

/// The built-in sample catalog
pub fn sample_courses() -> Vec<Course> {
    let ios_lessons = vec![
        lesson(
            "Introduction to SwiftUI",
            "SwiftUI is a modern framework for building user interfaces across all Apple \
             platforms. Learn the fundamentals of declarative UI programming.",
            20,
            LessonType::Video,
            Some("https://example.com/swiftui-intro"),
            vec![
                resource(
                    "SwiftUI Cheat Sheet",
                    "https://example.com/cheatsheet",
                    ResourceType::Pdf,
                ),
                resource(
                    "Sample Code",
                    "https://github.com/example/swiftui-samples",
                    ResourceType::Link,
                ),
            ],
        ),
        lesson(
            "Building Your First App",
            "Create a complete iOS app from scratch using SwiftUI. We'll cover navigation, \
             data binding, and user interactions.",
            30,
            LessonType::Reading,
            None,
            vec![resource(
                "Project Files",
                "https://example.com/project-files",
                ResourceType::Download,
            )],
        ),
        lesson(
            "State Management",
            "Master SwiftUI's state management system including @State, @Binding, \
             @ObservedObject, and @EnvironmentObject.",
            25,
            LessonType::Video,
            Some("https://example.com/state-management"),
            vec![],
        ),
    ];

    let design_lessons = vec![
        lesson(
            "UI/UX Fundamentals",
            "Learn the core principles of user interface and user experience design. \
             Understand how to create intuitive and beautiful interfaces.",
            25,
            LessonType::Reading,
            None,
            vec![resource(
                "Design Guidelines",
                "https://example.com/guidelines",
                ResourceType::Pdf,
            )],
        ),
        lesson(
            "Design Tools & Workflows",
            "Explore popular design tools like Figma, Sketch, and Adobe XD. Learn efficient \
             workflows for creating professional designs.",
            35,
            LessonType::Video,
            Some("https://example.com/design-tools"),
            vec![resource(
                "Figma Templates",
                "https://example.com/templates",
                ResourceType::Download,
            )],
        ),
    ];

    vec![
        Course {
            id: Uuid::new_v4(),
            title: "iOS Development with SwiftUI".to_string(),
            description: "Master iOS app development using Apple's modern SwiftUI framework. \
                          Build beautiful, responsive apps with less code."
                .to_string(),
            instructor: "Sarah Johnson".to_string(),
            category: CourseCategory::Programming,
            difficulty: CourseDifficulty::Intermediate,
            estimated_duration: 75,
            lessons: ios_lessons,
            thumbnail_url: Some("https://example.com/ios-thumbnail".to_string()),
        },
        Course {
            id: Uuid::new_v4(),
            title: "UI/UX Design Masterclass".to_string(),
            description: "Learn to create stunning user interfaces and exceptional user \
                          experiences. From wireframes to prototypes."
                .to_string(),
            instructor: "Mike Chen".to_string(),
            category: CourseCategory::Design,
            difficulty: CourseDifficulty::Beginner,
            estimated_duration: 60,
            lessons: design_lessons,
            thumbnail_url: Some("https://example.com/design-thumbnail".to_string()),
        },
        Course {
            id: Uuid::new_v4(),
            title: "Digital Marketing Strategy".to_string(),
            description: "Develop comprehensive digital marketing strategies that drive \
                          results. Learn SEO, social media, and content marketing."
                .to_string(),
            instructor: "Emily Rodriguez".to_string(),
            category: CourseCategory::Marketing,
            difficulty: CourseDifficulty::Beginner,
            estimated_duration: 20,
            lessons: vec![lesson(
                "Marketing Fundamentals",
                "Understanding the basics of digital marketing and how to create effective \
                 campaigns.",
                20,
                LessonType::Reading,
                None,
                vec![],
            )],
            thumbnail_url: Some("https://example.com/marketing-thumbnail".to_string()),
        },
    ]
}
