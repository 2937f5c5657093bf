//! Shared types and constants for setup-ruff.
//!
//! This crate holds the pieces every other crate needs: the identity of the
//! upstream repository the tool is fetched from, the name the tool is cached
//! under, and the [`Platform`]/[`Arch`] types that select a release asset.

mod platform;

pub use platform::{Arch, Platform};

/// Owner of the upstream GitHub repository.
pub const OWNER: &str = "astral-sh";

/// Name of the upstream GitHub repository.
pub const REPO: &str = "ruff";

/// Name the tool is registered under in the local tool cache. Also the
/// product prefix of release asset filenames.
pub const TOOL_CACHE_NAME: &str = "ruff";

/// Suffix appended to an asset download URL to address its companion
/// checksum file.
pub const CHECKSUM_SUFFIX: &str = ".sha256";
