//! In-memory auth backend for development and tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::model::{User, UserPreferences, UserProgress};

use super::{validate_credentials, AuthError, AuthService};

struct Account {
    password: String,
    user: User,
}

/// Auth backend holding accounts in memory
///
/// Ships with one fixture account (`student@example.com` /
/// `learning123`). Lookups are keyed by lowercased email. Login
/// updates the account's last-login timestamp.
pub struct MockAuthService {
    accounts: Mutex<HashMap<String, Account>>,
}

impl MockAuthService {
    /// Backend with the default fixture account
    pub fn new() -> Self {
        let service = Self::empty();
        service.register(
            "student@example.com",
            "learning123",
            "John",
            "Doe",
        );
        service
    }

    /// Backend with no accounts
    pub fn empty() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
        }
    }

    /// Add an account
    pub fn register(&self, email: &str, password: &str, first_name: &str, last_name: &str) {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            profile_image_url: None,
            join_date: now,
            last_login_date: now,
            preferences: UserPreferences::default(),
            progress: UserProgress::default(),
        };

        self.accounts.lock().expect("auth registry poisoned").insert(
            email.to_lowercase(),
            Account {
                password: password.to_string(),
                user,
            },
        );
    }
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        validate_credentials(email, password)?;

        let mut accounts = self.accounts.lock().expect("auth registry poisoned");

        // Unknown email and wrong password produce the same error
        let account = accounts
            .get_mut(&email.trim().to_lowercase())
            .filter(|a| a.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        account.user.last_login_date = Utc::now();

        tracing::debug!("Login succeeded for {}", account.user.email);
        Ok(account.user.clone())
    }

    async fn logout(&self) {
        tracing::debug!("Logged out");
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let accounts = self.accounts.lock().expect("auth registry poisoned");
        if !accounts.contains_key(&email.trim().to_lowercase()) {
            return Err(AuthError::UnknownEmail);
        }

        tracing::info!("Password reset link sent to {}", email);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod mock_auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_account_logs_in() {
        let auth = MockAuthService::new();

        let user = auth
            .login("student@example.com", "learning123")
            .await
            .unwrap();
        assert_eq!(user.full_name(), "John Doe");
        assert_eq!(user.email, "student@example.com");
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let auth = MockAuthService::new();
        let user = auth
            .login("Student@Example.COM", "learning123")
            .await
            .unwrap();
        assert_eq!(user.email, "student@example.com");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_alike() {
        let auth = MockAuthService::new();

        let wrong_password = auth
            .login("student@example.com", "nope")
            .await
            .unwrap_err();
        let unknown_email = auth.login("ghost@example.com", "nope").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_validation_runs_before_lookup() {
        let auth = MockAuthService::new();

        let err = auth.login("", "learning123").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));

        let err = auth.login("not-an-email", "learning123").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail));
    }

    #[tokio::test]
    async fn test_login_refreshes_last_login() {
        let auth = MockAuthService::new();

        let first = auth
            .login("student@example.com", "learning123")
            .await
            .unwrap();
        let second = auth
            .login("student@example.com", "learning123")
            .await
            .unwrap();

        assert!(second.last_login_date >= first.last_login_date);
    }

    #[tokio::test]
    async fn test_reset_password() {
        let auth = MockAuthService::new();

        auth.reset_password("student@example.com").await.unwrap();

        let err = auth.reset_password("ghost@example.com").await.unwrap_err();
        assert!(matches!(err, AuthError::UnknownEmail));
    }

    #[tokio::test]
    async fn test_registered_account() {
        let auth = MockAuthService::empty();
        auth.register("maria@example.com", "s3cret!", "Maria", "Silva");

        let user = auth.login("maria@example.com", "s3cret!").await.unwrap();
        assert_eq!(user.first_name, "Maria");
    }
}
