//! Catalog query engine
//!
//! Filters the course sequence against zero or more simultaneously
//! active predicates, combined with logical AND. Absent predicates
//! impose no constraint, the original relative order is preserved, and
//! there is no ranking or scoring. An empty result is a valid,
//! non-error outcome.

use crate::model::{Course, CourseCategory, CourseDifficulty};

/// A filter over the course catalog
///
/// Text matches case-insensitively against title, description and
/// instructor. Category and difficulty are exact, single-select
/// toggles: selecting the already-selected value clears it, mirroring
/// filter-chip behavior in a UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    query: Option<String>,
    category: Option<CourseCategory>,
    difficulty: Option<CourseDifficulty>,
}

impl CourseFilter {
    /// Filter with no active predicates (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text predicate. Empty or whitespace-only input clears it.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_category(mut self, category: CourseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_difficulty(mut self, difficulty: CourseDifficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Replace the text predicate in place
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        let trimmed = query.trim();
        self.query = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Toggle the category predicate
    ///
    /// Selecting the currently selected category deselects it;
    /// anything else replaces the selection.
    pub fn toggle_category(&mut self, category: CourseCategory) {
        if self.category == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category);
        }
    }

    /// Toggle the difficulty predicate, with the same semantics as
    /// [`CourseFilter::toggle_category`]
    pub fn toggle_difficulty(&mut self, difficulty: CourseDifficulty) {
        if self.difficulty == Some(difficulty) {
            self.difficulty = None;
        } else {
            self.difficulty = Some(difficulty);
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn category(&self) -> Option<CourseCategory> {
        self.category
    }

    pub fn difficulty(&self) -> Option<CourseDifficulty> {
        self.difficulty
    }

    /// Whether no predicate is active
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.category.is_none() && self.difficulty.is_none()
    }

    /// Deactivate every predicate
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a course passes every active predicate
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(ref query) = self.query {
            let needle = query.to_lowercase();
            let matches_text = course.title.to_lowercase().contains(&needle)
                || course.description.to_lowercase().contains(&needle)
                || course.instructor.to_lowercase().contains(&needle);
            if !matches_text {
                return false;
            }
        }

        if let Some(category) = self.category {
            if course.category != category {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if course.difficulty != difficulty {
                return false;
            }
        }

        true
    }

    /// Filter a course sequence, preserving original relative order
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn course(
        title: &str,
        instructor: &str,
        category: CourseCategory,
        difficulty: CourseDifficulty,
    ) -> Course {
        Course {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: format!("A course about {title}"),
            instructor: instructor.to_string(),
            category,
            difficulty,
            estimated_duration: 60,
            lessons: vec![],
            thumbnail_url: None,
        }
    }

    fn sample() -> Vec<Course> {
        vec![
            course(
                "iOS Dev",
                "Sarah Johnson",
                CourseCategory::Programming,
                CourseDifficulty::Intermediate,
            ),
            course(
                "UX Design",
                "Mike Chen",
                CourseCategory::Design,
                CourseDifficulty::Beginner,
            ),
            course(
                "Growth Marketing",
                "Emily Rodriguez",
                CourseCategory::Marketing,
                CourseDifficulty::Beginner,
            ),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let courses = sample();
        let filter = CourseFilter::new();

        let result = filter.apply(&courses);

        assert_eq!(result.len(), courses.len());
        for (got, want) in result.iter().zip(courses.iter()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let courses = sample();

        let result = CourseFilter::new().with_query("IOS").apply(&courses);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "iOS Dev");

        let result = CourseFilter::new().with_query("ios").apply(&courses);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_text_matches_instructor_and_description() {
        let courses = sample();

        // Instructor field
        let result = CourseFilter::new().with_query("rodriguez").apply(&courses);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Growth Marketing");

        // Description field ("A course about UX Design")
        let result = CourseFilter::new().with_query("about ux").apply(&courses);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "UX Design");
    }

    #[test]
    fn test_category_filter_is_exact() {
        let courses = sample();

        let result = CourseFilter::new()
            .with_category(CourseCategory::Design)
            .apply(&courses);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "UX Design");
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let courses = sample();

        // Text matches one course, category another: intersection is empty
        let result = CourseFilter::new()
            .with_query("ios")
            .with_category(CourseCategory::Design)
            .apply(&courses);
        assert!(result.is_empty());

        // Compatible predicates intersect
        let result = CourseFilter::new()
            .with_query("design")
            .with_difficulty(CourseDifficulty::Beginner)
            .apply(&courses);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "UX Design");
    }

    #[test]
    fn test_order_preserved() {
        let courses = sample();

        let result = CourseFilter::new()
            .with_difficulty(CourseDifficulty::Beginner)
            .apply(&courses);

        let titles: Vec<&str> = result.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["UX Design", "Growth Marketing"]);
    }

    #[test]
    fn test_toggle_select_then_deselect() {
        let courses = sample();
        let mut filter = CourseFilter::new();

        filter.toggle_category(CourseCategory::Design);
        assert_eq!(filter.category(), Some(CourseCategory::Design));
        assert_eq!(filter.apply(&courses).len(), 1);

        // Toggling the selected value clears it: same result as never
        // having selected it
        filter.toggle_category(CourseCategory::Design);
        assert_eq!(filter.category(), None);
        assert_eq!(filter.apply(&courses).len(), courses.len());
    }

    #[test]
    fn test_toggle_replaces_other_selection() {
        let mut filter = CourseFilter::new();

        filter.toggle_category(CourseCategory::Design);
        filter.toggle_category(CourseCategory::Marketing);
        assert_eq!(filter.category(), Some(CourseCategory::Marketing));

        filter.toggle_difficulty(CourseDifficulty::Beginner);
        filter.toggle_difficulty(CourseDifficulty::Advanced);
        assert_eq!(filter.difficulty(), Some(CourseDifficulty::Advanced));
    }

    #[test]
    fn test_blank_query_imposes_no_constraint() {
        let courses = sample();

        let result = CourseFilter::new().with_query("   ").apply(&courses);
        assert_eq!(result.len(), courses.len());

        let mut filter = CourseFilter::new().with_query("ios");
        filter.set_query("");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let courses = sample();
        let result = CourseFilter::new().with_query("quantum").apply(&courses);
        assert!(result.is_empty());
    }

    #[test]
    fn test_excluded_courses_fail_a_predicate() {
        let courses = sample();
        let filter = CourseFilter::new().with_difficulty(CourseDifficulty::Beginner);

        let result = filter.apply(&courses);
        for c in &courses {
            if result.iter().any(|r| r.id == c.id) {
                assert!(filter.matches(c));
            } else {
                assert!(!filter.matches(c));
            }
        }
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut filter = CourseFilter::new()
            .with_query("ios")
            .with_category(CourseCategory::Programming)
            .with_difficulty(CourseDifficulty::Advanced);
        assert!(!filter.is_empty());

        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter, CourseFilter::new());
    }
}
