/*
    errors.rs - Error types for the store subsystem

    Every condition here is local, recoverable, and user-actionable; the
    store reports them synchronously and none are fatal to the process.
    The blob loader itself never raises: malformed persisted data degrades
    to the caller's fallback.
*/

use thiserror::Error;

/// Errors that can occur in the store subsystem
#[derive(Debug, Error)]
pub enum StoreError {
    /// Email is already registered
    #[error("Email already used: {0}")]
    DuplicateEmail(String),

    /// No user matches the given email/password pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Operation requires an active session
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Session is not allowed to perform the operation
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A post needs text or an image
    #[error("Post is empty")]
    EmptyPost,

    /// A comment needs non-blank text
    #[error("Comment is empty")]
    EmptyComment,

    /// Storage I/O error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("post".to_string());
        assert_eq!(err.to_string(), "Not found: post");

        let err = StoreError::DuplicateEmail("alice@example.com".to_string());
        assert_eq!(err.to_string(), "Email already used: alice@example.com");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Storage(_)));
    }

    #[test]
    fn test_serde_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let store_err: StoreError = json_err.into();
        assert!(matches!(store_err, StoreError::Serialization(_)));
    }
}
