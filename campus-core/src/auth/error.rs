//! Auth error types

use thiserror::Error;

/// Authentication failures
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email or password was empty
    #[error("Please enter both email and password")]
    MissingCredentials,

    /// Email does not look like an email address
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Wrong email or wrong password. Deliberately does not say which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password reset requested for an address with no account
    #[error("No account found for this email address")]
    UnknownEmail,

    /// The identity backend failed
    #[error("Authentication backend error: {reason}")]
    Backend { reason: String },
}
