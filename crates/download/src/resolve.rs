//! Version specifier resolution against published release tags.

use setup_ruff_github::ReleaseSource;
use setup_ruff_tool_cache::versions::{evaluate_versions, is_explicit_version};
use tracing::debug;

use crate::{Error, Result};

/// Specifier that resolves to the most recent published release.
pub const LATEST: &str = "latest";

/// Resolve a version specifier to a concrete release tag.
///
/// `latest` is replaced by the tag of the most recent release via a single
/// targeted lookup. An explicit version is returned as-is without consulting
/// the listing at all - this keeps pinned versions cheap and lets callers
/// pin a tag the paginated listing has not indexed yet (the release host is
/// eventually consistent). Anything else is evaluated as a semver range over
/// the full enumeration; no satisfying tag is a resolution error.
pub async fn resolve_version<R>(releases: &R, version: &str) -> Result<String>
where
    R: ReleaseSource + ?Sized,
{
    let version = if version == LATEST {
        releases.latest_tag().await?
    } else {
        version.to_string()
    };

    if is_explicit_version(&version) {
        debug!(%version, "Version is explicit, skipping release enumeration");
        return Ok(version);
    }

    let available = releases.release_tags().await?;
    debug!(count = available.len(), specifier = %version, "Evaluating version range");
    evaluate_versions(&available, &version).ok_or_else(|| Error::no_matching_version(&version))
}
