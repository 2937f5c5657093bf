//! Error types for tool cache operations.

use std::path::Path;
use thiserror::Error;

/// Result type for tool cache operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during cache and extraction operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error with path context.
    #[error("I/O {operation} failed: {}: {source}", path.display())]
    Io {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
        /// Path that caused the error.
        path: Box<Path>,
        /// Operation that failed (e.g. "read", "create", "rename").
        operation: String,
    },

    /// Cache root could not be determined.
    #[error("Could not determine tool cache directory: {message}")]
    Configuration {
        /// What was missing.
        message: String,
    },

    /// Archive could not be unpacked.
    #[error("Failed to extract archive: {message}")]
    Extract {
        /// Error message from the archive reader.
        message: String,
    },
}

impl Error {
    /// Create an I/O error with path context.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl AsRef<Path>, operation: impl Into<String>) -> Self {
        Self::Io {
            source,
            path: path.as_ref().into(),
            operation: operation.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an extraction error.
    #[must_use]
    pub fn extract(message: impl Into<String>) -> Self {
        Self::Extract {
            message: message.into(),
        }
    }
}
