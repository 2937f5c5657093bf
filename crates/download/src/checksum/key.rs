//! Checksum key derivation from release asset download URLs.
//!
//! Every checksum entry is indexed by `<name>-<version>`, where `name` is
//! the platform/architecture part of the asset filename and `version` comes
//! from the release tag in the URL path. The key must round-trip: deriving
//! it from the URL used to populate the table reproduces the key used to
//! look the checksum up at verification time.

use setup_ruff_core::TOOL_CACHE_NAME;
use setup_ruff_tool_cache::versions::normalize_version;

use crate::{Error, Result};

/// The recognized asset filename shapes.
///
/// Upstream changed its naming convention over time; both shapes stay
/// supported because old releases remain resolvable:
///
/// - `Embedded`: `ruff-0.4.10-aarch64-apple-darwin.tar.gz.sha256`
///   (version embedded in the filename, current convention)
/// - `Legacy`: `ruff-aarch64-apple-darwin.tar.gz.sha256`
///   (bare product prefix, releases up to 0.4.x and again from 0.8.0)
/// - `Source`: `source.tar.gz` and friends, which carry no per-platform
///   checksum entry at all.
#[derive(Debug, PartialEq, Eq)]
enum AssetName<'a> {
    Source,
    Embedded { name: &'a str },
    Legacy { name: &'a str },
}

/// Derive the checksum table key for an asset download URL.
///
/// Returns `Ok(None)` for source archives, which are skipped rather than
/// keyed. URLs without the expected `.../<tag>/<asset>` path shape and
/// filenames matching neither naming convention are explicit errors.
pub fn checksum_key(download_url: &str) -> Result<Option<String>> {
    let mut segments = download_url.rsplit('/');
    let file_name = segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::malformed_url(download_url))?;
    let tag = segments
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::malformed_url(download_url))?;

    let version = normalize_version(tag);
    if version.is_empty() {
        return Err(Error::malformed_url(download_url));
    }

    match parse_asset_name(file_name, version)? {
        AssetName::Source => Ok(None),
        AssetName::Embedded { name } | AssetName::Legacy { name } => {
            Ok(Some(format!("{name}-{version}")))
        }
    }
}

fn parse_asset_name<'a>(file_name: &'a str, version: &str) -> Result<AssetName<'a>> {
    if file_name.starts_with("source") {
        return Ok(AssetName::Source);
    }

    if let Some(index) = file_name.find(version) {
        // Current shape: the name sits between the embedded version and the
        // first following dot, behind a separator.
        let rest = &file_name[index + version.len()..];
        let name = rest.split('.').next().unwrap_or(rest);
        let name = name.strip_prefix('-').unwrap_or(name);
        return Ok(AssetName::Embedded { name });
    }

    // Legacy shape: product prefix straight into the name.
    let stem = file_name.split('.').next().unwrap_or(file_name);
    stem.strip_prefix(TOOL_CACHE_NAME)
        .and_then(|rest| rest.strip_prefix('-'))
        .map(|name| AssetName::Legacy { name })
        .ok_or_else(|| Error::unrecognized_asset(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_version_shape() {
        let url = "https://github.com/astral-sh/ruff/releases/download/v0.4.10/ruff-0.4.10-aarch64-apple-darwin.tar.gz.sha256";
        assert_eq!(
            checksum_key(url).unwrap(),
            Some("aarch64-apple-darwin-0.4.10".to_string())
        );
    }

    #[test]
    fn legacy_shape_with_v_prefixed_tag() {
        let url = "https://github.com/astral-sh/ruff/releases/download/v0.1.7/ruff-aarch64-apple-darwin.tar.gz.sha256";
        assert_eq!(
            checksum_key(url).unwrap(),
            Some("aarch64-apple-darwin-0.1.7".to_string())
        );
    }

    #[test]
    fn legacy_shape_with_bare_tag() {
        let url = "https://github.com/astral-sh/ruff/releases/download/0.8.0/ruff-aarch64-apple-darwin.tar.gz.sha256";
        assert_eq!(
            checksum_key(url).unwrap(),
            Some("aarch64-apple-darwin-0.8.0".to_string())
        );
    }

    #[test]
    fn source_archives_are_skipped() {
        let url = "https://github.com/astral-sh/ruff/releases/download/v0.4.10/source.tar.gz";
        assert_eq!(checksum_key(url).unwrap(), None);
    }

    #[test]
    fn windows_zip_asset() {
        let url = "https://github.com/astral-sh/ruff/releases/download/v0.4.10/ruff-0.4.10-x86_64-pc-windows-msvc.zip.sha256";
        assert_eq!(
            checksum_key(url).unwrap(),
            Some("x86_64-pc-windows-msvc-0.4.10".to_string())
        );
    }

    #[test]
    fn url_without_path_segments_is_malformed() {
        assert!(matches!(
            checksum_key("ruff-0.4.10.tar.gz"),
            Err(Error::MalformedUrl { .. })
        ));
    }

    #[test]
    fn tag_without_version_digits_is_malformed() {
        assert!(matches!(
            checksum_key("https://example.com/download/nightly/ruff-aarch64.tar.gz"),
            Err(Error::MalformedUrl { .. })
        ));
    }

    #[test]
    fn foreign_filename_is_rejected() {
        let url = "https://github.com/astral-sh/ruff/releases/download/v0.1.7/checksums.txt";
        assert!(matches!(
            checksum_key(url),
            Err(Error::UnrecognizedAsset { .. })
        ));
    }
}
