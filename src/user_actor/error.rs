//! Error types for the authenticator.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while registering accounts or issuing and checking tokens.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// No account with that username.
    #[error("user {0} not found")]
    NotFound(String),

    /// The password does not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The bearer token is missing, malformed or unknown.
    #[error("invalid token")]
    InvalidToken,

    /// Registration input was rejected.
    #[error("{0}")]
    Validation(String),

    /// argon2 failed, or the stored hash could not be parsed.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// An error occurred while communicating with the actor system.
    #[error("auth store unavailable: {0}")]
    Unavailable(String),
}

impl From<FrameworkError> for AuthError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(what) => AuthError::NotFound(what),
            FrameworkError::EntityError(inner) => match inner.downcast::<AuthError>() {
                Ok(auth_error) => *auth_error,
                Err(other) => AuthError::Unavailable(other.to_string()),
            },
            other => AuthError::Unavailable(other.to_string()),
        }
    }
}
