//! Authentication service abstraction
//!
//! One auth interface for the whole application; identity backends
//! plug in behind [`AuthService`]. Credential shape is validated here
//! before any backend is consulted, so every implementation sees only
//! well-formed input.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::User;

mod error;
mod mock;

pub use error::AuthError;
pub use mock::MockAuthService;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("email regex is valid")
});

/// Check that credentials are present and the email is well-formed
///
/// Shared by all [`AuthService`] implementations via
/// [`AuthService::login`]'s contract.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(AuthError::InvalidEmail);
    }
    Ok(())
}

/// Trait for identity providers
///
/// Implementations handle the specifics of their backend while
/// presenting a unified interface to the application. Callers are
/// expected to run [`validate_credentials`] first (the mock does this
/// itself; remote backends should too, to avoid a round trip for
/// obviously malformed input).
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate and return the account on success
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// End the current session
    ///
    /// Infallible for local backends; remote backends swallow errors
    /// and log, since there is nothing useful a caller can do with a
    /// failed logout.
    async fn logout(&self);

    /// Trigger a password reset for the given email
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;

    /// Backend identifier for logging
    fn name(&self) -> &'static str;
}
