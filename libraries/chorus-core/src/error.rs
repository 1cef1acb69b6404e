/// Core error types for Chorus
use thiserror::Error;

/// Result type alias using `ChorusError`
pub type Result<T> = std::result::Result<T, ChorusError>;

/// Core error type for Chorus
#[derive(Error, Debug)]
pub enum ChorusError {
    /// Referenced entity does not exist (stale client view; aborts the call)
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Track descriptor is structurally invalid
    #[error("Malformed track descriptor: {0}")]
    MalformedTrack(String),

    /// Invalid input outside the track descriptors (e.g. over-long name)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Concurrent modification detected by the storage layer; retryable
    #[error("Transaction conflict: {0}")]
    Conflict(String),

    /// Caller is not allowed to perform the operation
    #[error("Permission denied")]
    PermissionDenied,

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ChorusError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a malformed track error
    pub fn malformed_track(msg: impl Into<String>) -> Self {
        Self::MalformedTrack(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for errors a caller may retry after backing off
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for ChorusError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            // SQLITE_BUSY (5) / SQLITE_LOCKED (6): another writer holds the
            // database; surfaced as a retryable conflict instead of a
            // generic database failure.
            let code = db.code();
            let locked = matches!(code.as_deref(), Some("5") | Some("6"))
                || db.message().contains("database is locked");
            if locked {
                return Self::Conflict(db.message().to_string());
            }
        }
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_entity_and_id() {
        let err = ChorusError::not_found("File", 42);
        assert_eq!(err.to_string(), "File not found: 42");
    }

    #[test]
    fn only_conflicts_are_retryable() {
        assert!(ChorusError::Conflict("locked".into()).is_retryable());
        assert!(!ChorusError::not_found("User", 1).is_retryable());
        assert!(!ChorusError::malformed_track("both sources").is_retryable());
    }
}
