//! User accounts, preferences and learning progress

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered learner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub email: String,

    pub first_name: String,

    pub last_name: String,

    #[serde(default)]
    pub profile_image_url: Option<String>,

    /// When the account was created
    pub join_date: DateTime<Utc>,

    /// Most recent successful login
    pub last_login_date: DateTime<Utc>,

    #[serde(default)]
    pub preferences: UserPreferences,

    #[serde(default)]
    pub progress: UserProgress,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Per-account settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub notifications_enabled: bool,
    pub dark_mode_enabled: bool,
    pub auto_play_videos: bool,
    pub download_over_wifi_only: bool,
    pub language: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            dark_mode_enabled: false,
            auto_play_videos: true,
            download_over_wifi_only: true,
            language: "en".to_string(),
        }
    }
}

/// Aggregated learning statistics for an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProgress {
    pub completed_courses: u32,

    pub total_courses: u32,

    /// Total study time in minutes
    pub total_study_time: u32,

    /// Consecutive study days
    pub current_streak: u32,

    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl UserProgress {
    /// Completion rate as a percentage, zero when no courses are enrolled
    pub fn completion_rate(&self) -> f64 {
        if self.total_courses == 0 {
            return 0.0;
        }
        f64::from(self.completed_courses) / f64::from(self.total_courses) * 100.0
    }
}

/// An earned achievement badge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub date_earned: DateTime<Utc>,

    pub kind: AchievementKind,
}

/// Achievement categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementKind {
    #[serde(rename = "First Course")]
    FirstCourse,
    #[serde(rename = "Week Streak")]
    WeekStreak,
    #[serde(rename = "Perfect Score")]
    PerfectScore,
    #[serde(rename = "Social Learner")]
    SocialLearner,
    #[serde(rename = "Night Owl")]
    NightOwl,
}

#[cfg(test)]
mod user_tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "student@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            profile_image_url: None,
            join_date: Utc::now(),
            last_login_date: Utc::now(),
            preferences: UserPreferences::default(),
            progress: UserProgress {
                completed_courses: 2,
                total_courses: 5,
                total_study_time: 180,
                current_streak: 7,
                achievements: vec![],
            },
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_user().full_name(), "John Doe");
    }

    #[test]
    fn test_completion_rate() {
        let user = sample_user();
        assert!((user.progress.completion_rate() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_rate_no_courses() {
        let progress = UserProgress::default();
        assert_eq!(progress.completion_rate(), 0.0);
    }

    #[test]
    fn test_achievement_kind_serde_tags() {
        let json = serde_json::to_string(&AchievementKind::WeekStreak).unwrap();
        assert_eq!(json, "\"Week Streak\"");
    }
}
