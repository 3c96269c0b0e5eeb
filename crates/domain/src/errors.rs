//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Rolodex
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RolodexError {
    /// A capability check failed before the operation was attempted.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// A candidate contact collides with an existing record for the
    /// same owner. The message carries the conflicting record's
    /// identifying fields.
    #[error("Duplicate contact: {0}")]
    Duplicate(String),

    /// The remote document store rejected a call (network/auth/quota).
    #[error("Store error: {0}")]
    Store(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Rolodex operations
pub type Result<T> = std::result::Result<T, RolodexError>;

#[cfg(test)]
mod tests {
    //! Unit tests for errors.
    use super::*;

    /// Tests that error variants render their prefixed display messages.
    #[test]
    fn test_error_display() {
        let err = RolodexError::PermissionDenied("create requires the user role".into());
        assert_eq!(err.to_string(), "Permission denied: create requires the user role");

        let err = RolodexError::Store("timeout".into());
        assert_eq!(err.to_string(), "Store error: timeout");
    }

    /// Tests that errors serialize to the tagged JSON form used by the UI.
    #[test]
    fn test_error_serialization() {
        let err = RolodexError::Duplicate("a@x.com".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Duplicate");
        assert_eq!(json["message"], "a@x.com");
    }
}
