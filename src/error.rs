//! Custom error types for spendbook
//!
//! This module defines the error hierarchy for the tracker using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Registration attempted with a username that is already taken
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// Login failed; does not say whether the user exists
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// An expense operation was attempted before any successful login
    #[error("No user logged in")]
    NoActiveSession,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential sealing or verification failures
    #[error("Credential error: {0}")]
    Credential(String),
}

impl TrackerError {
    /// Check if this error means no account is logged in
    pub fn is_session_error(&self) -> bool {
        matches!(self, Self::NoActiveSession)
    }

    /// Check if this error came from register/login
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::DuplicateUsername(_) | Self::InvalidCredentials)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Errors the interactive menu reports and then keeps running after
    pub fn is_recoverable(&self) -> bool {
        self.is_auth_error()
            || self.is_session_error()
            || self.is_validation()
            || matches!(self, Self::Credential(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_duplicate_username_display() {
        let err = TrackerError::DuplicateUsername("alice".into());
        assert_eq!(err.to_string(), "Username already taken: alice");
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_invalid_credentials_hides_cause() {
        let err = TrackerError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid username or password");
    }

    #[test]
    fn test_session_error() {
        assert!(TrackerError::NoActiveSession.is_session_error());
        assert!(!TrackerError::InvalidCredentials.is_session_error());
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(TrackerError::NoActiveSession.is_recoverable());
        assert!(TrackerError::InvalidCredentials.is_recoverable());
        assert!(TrackerError::Validation("too big".into()).is_recoverable());
        assert!(TrackerError::Credential("bad params".into()).is_recoverable());
        assert!(!TrackerError::Io("broken pipe".into()).is_recoverable());
        assert!(!TrackerError::Config("bad file".into()).is_recoverable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
