//! Error types for forecare.
//!
//! This module defines all error types used throughout the forecare crate.
//! The surface is deliberately small: the dashboard runs entirely on
//! in-memory fixture data, so the only real failure sources are the
//! configuration layer and the session store on disk.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for forecare operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Session Errors ===
    /// The session store file could not be read.
    #[error("failed to read session store at {path}: {source}")]
    SessionRead {
        /// Path to the session file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The session store file could not be written.
    #[error("failed to write session store at {path}: {source}")]
    SessionWrite {
        /// Path to the session file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for forecare operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a session read error.
    #[must_use]
    pub fn session_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SessionRead {
            path: path.into(),
            source,
        }
    }

    /// Create a session write error.
    #[must_use]
    pub fn session_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SessionWrite {
            path: path.into(),
            source,
        }
    }

    /// Check if this error came from the session store.
    #[must_use]
    pub fn is_session_error(&self) -> bool {
        matches!(self, Self::SessionRead { .. } | Self::SessionWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "invalid typing delay".to_string(),
        };
        assert!(err.to_string().contains("invalid typing delay"));
    }

    #[test]
    fn test_session_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::session_read("/tmp/forecare_session.json", io_err);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/forecare_session.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_session_write_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::session_write("/root/forbidden/session.json", io_err);
        assert!(err.to_string().contains("/root/forbidden/session.json"));
    }

    #[test]
    fn test_is_session_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(Error::session_read("/tmp/s.json", io_err).is_session_error());
        assert!(!Error::internal("other").is_session_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }
}
