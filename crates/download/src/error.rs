//! Error types for the download pipeline.

use thiserror::Error;

/// Result type for download operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur resolving, verifying, or installing a release.
///
/// All of these are fatal: the pipeline has no retry logic and no
/// partial-success state. Either the tool ends up installed and registered
/// in the cache, or nothing is cached.
#[derive(Error, Debug)]
pub enum Error {
    /// No release tag satisfies the requested version specifier.
    #[error("No version found for {requested}")]
    NoMatchingVersion {
        /// The version specifier that failed to resolve.
        requested: String,
    },

    /// A download URL does not have the expected `.../<tag>/<asset>` shape.
    #[error("Malformed download URL: {url}")]
    MalformedUrl {
        /// The offending URL.
        url: String,
    },

    /// An asset filename matches neither recognized naming convention.
    #[error("Unrecognized asset filename: {file_name}")]
    UnrecognizedAsset {
        /// The offending filename.
        file_name: String,
    },

    /// Computed and expected checksums disagree.
    ///
    /// The downloaded artifact must not be used or cached.
    #[error("Checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch {
        /// Checksum the release host published (or the caller supplied).
        expected: String,
        /// Checksum computed over the downloaded bytes.
        actual: String,
    },

    /// A fetched checksum file carried no token.
    #[error("Empty checksum file at {url}")]
    EmptyChecksumFile {
        /// URL of the checksum file.
        url: String,
    },

    /// Network or host error retrieving an asset or release listing.
    #[error(transparent)]
    Fetch(#[from] setup_ruff_github::Error),

    /// Tool cache or extraction failure.
    #[error(transparent)]
    Cache(#[from] setup_ruff_tool_cache::Error),

    /// I/O error writing a generated file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a resolution failure.
    #[must_use]
    pub fn no_matching_version(requested: impl Into<String>) -> Self {
        Self::NoMatchingVersion {
            requested: requested.into(),
        }
    }

    /// Create a malformed-URL error.
    #[must_use]
    pub fn malformed_url(url: impl Into<String>) -> Self {
        Self::MalformedUrl { url: url.into() }
    }

    /// Create an unrecognized-asset error.
    #[must_use]
    pub fn unrecognized_asset(file_name: impl Into<String>) -> Self {
        Self::UnrecognizedAsset {
            file_name: file_name.into(),
        }
    }

    /// Create a checksum mismatch error.
    #[must_use]
    pub fn checksum_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ChecksumMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
