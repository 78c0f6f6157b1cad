//! Error types for the kura library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the kura library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a kura error.
///
/// # Examples
///
/// ```
/// use kura::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the kura library.
///
/// This enum encompasses all possible error conditions that can occur
/// during reservation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid date range was provided.
    #[error("invalid date range {start}..{end}: {reason}")]
    InvalidDateRange {
        /// The requested start date (ISO-8601).
        start: String,
        /// The requested end date (ISO-8601).
        end: String,
        /// The reason the range is invalid.
        reason: String,
    },

    /// A requested date range conflicts with an existing reservation.
    #[error("booking conflict: {details}")]
    BookingConflict {
        /// Details about the conflicting reservation.
        details: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An unrecognized status value was supplied.
    #[error("unknown {kind} status '{value}'")]
    UnknownStatus {
        /// Which status domain was targeted ("reservation" or "payment").
        kind: String,
        /// The unrecognized value.
        value: String,
    },

    /// Waiting for a database lock exceeded the busy timeout.
    #[error("timed out waiting for a database lock")]
    LockTimeout,

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: std::path::PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            // SQLite reports an exhausted busy timeout as SQLITE_BUSY (or
            // SQLITE_LOCKED for same-connection contention)
            rusqlite::Error::SqliteFailure(e, _)
                if matches!(
                    e.code,
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
                ) =>
            {
                Self::LockTimeout
            }
            other => Self::Database(other),
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use kura::Error;
    ///
    /// let err = Error::NotFound { resource: "space 7".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a booking conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use kura::Error;
    ///
    /// let err = Error::BookingConflict { details: "overlaps reservation 3".to_string() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::BookingConflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_range_error() {
        let err = Error::InvalidDateRange {
            start: "2025-06-10".to_string(),
            end: "2025-06-01".to_string(),
            reason: "start is after end".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid date range"));
        assert!(display.contains("2025-06-10"));
        assert!(display.contains("start is after end"));
    }

    #[test]
    fn test_booking_conflict_error() {
        let err = Error::BookingConflict {
            details: "space 3 already reserved for 2025-06-01..2025-06-05".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("booking conflict"));
        assert!(display.contains("already reserved"));
        assert!(err.is_conflict());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "username".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("username"));
        assert!(display.contains("must be non-empty"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            resource: "reservation 12".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("reservation 12"));
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_unknown_status_error() {
        let err = Error::UnknownStatus {
            kind: "payment".to_string(),
            value: "partial".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("unknown payment status"));
        assert!(display.contains("partial"));
    }

    #[test]
    fn test_lock_timeout_error() {
        let err = Error::LockTimeout;
        let display = format!("{err}");
        assert!(display.contains("database lock"));
    }

    #[test]
    fn test_busy_sqlite_error_becomes_lock_timeout() {
        let busy = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        );
        assert!(matches!(Error::from(busy), Error::LockTimeout));

        let locked = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
            None,
        );
        assert!(matches!(Error::from(locked), Error::LockTimeout));

        let constraint = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT),
            None,
        );
        assert!(matches!(Error::from(constraint), Error::Database(_)));
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("unsupported schema version"));
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i64> {
            Err(Error::NotFound {
                resource: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
