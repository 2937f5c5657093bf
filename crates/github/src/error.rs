//! Error types for GitHub API and asset fetch operations.

use thiserror::Error;

/// Result type for GitHub operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the release host.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to construct an HTTP or API client.
    #[error("Failed to create GitHub client: {message}")]
    Client {
        /// Error message from the underlying client builder.
        message: String,
    },

    /// A GitHub API call failed.
    #[error("GitHub API request failed: {message}")]
    Api {
        /// Error message from the API client.
        message: String,
    },

    /// An asset fetch failed at the transport level.
    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        /// The URL that was requested.
        url: String,
        /// Error message from the HTTP client.
        message: String,
    },

    /// The release host answered with a non-success status.
    #[error("Unexpected status {status} fetching {url}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
}

impl Error {
    /// Create a client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Create an API error.
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a transport-level fetch error.
    #[must_use]
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a non-success status error.
    #[must_use]
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }
}
