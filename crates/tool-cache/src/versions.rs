//! Semver helpers shared by version resolution and the cache probe.

use semver::{Version, VersionReq};

/// Strip the leading marker characters from a release tag, yielding a bare
/// version string. Tags appear both as `v0.4.10` and `0.4.10` upstream.
#[must_use]
pub fn normalize_version(tag: &str) -> &str {
    tag.trim_start_matches(|c: char| !c.is_ascii_digit())
}

/// Whether `version` is a syntactically explicit, fully qualified version
/// (no range operators, all three components present).
///
/// Explicit versions short-circuit resolution: they are used as-is without
/// consulting the available-tags list, which both saves a paginated listing
/// round trip and allows pinning a tag the listing has not indexed yet.
#[must_use]
pub fn is_explicit_version(version: &str) -> bool {
    Version::parse(normalize_version(version.trim())).is_ok()
}

/// Evaluate a version-range expression against a set of tags and return the
/// highest-precedence match, or `None` when nothing satisfies it.
///
/// An explicit version is treated as an exact requirement, not a caret
/// range. Tags that do not parse as semver are skipped.
#[must_use]
pub fn evaluate_versions(versions: &[String], range: &str) -> Option<String> {
    let range = range.trim();
    let req = if is_explicit_version(range) {
        VersionReq::parse(&format!("={}", normalize_version(range))).ok()?
    } else {
        VersionReq::parse(range).ok()?
    };

    versions
        .iter()
        .filter_map(|tag| {
            Version::parse(normalize_version(tag))
                .ok()
                .map(|version| (version, tag))
        })
        .filter(|(version, _)| req.matches(version))
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, tag)| tag.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn normalize_strips_leading_markers() {
        assert_eq!(normalize_version("v0.4.10"), "0.4.10");
        assert_eq!(normalize_version("0.4.10"), "0.4.10");
        assert_eq!(normalize_version("release-1.2.3"), "1.2.3");
    }

    #[test]
    fn explicit_versions_are_recognized() {
        assert!(is_explicit_version("0.4.10"));
        assert!(is_explicit_version("v0.4.10"));
        assert!(is_explicit_version("1.2.3-beta.1"));
        assert!(!is_explicit_version("0.4"));
        assert!(!is_explicit_version(">=0.3"));
        assert!(!is_explicit_version("latest"));
    }

    #[test]
    fn range_selects_highest_match() {
        let available = tags(&["0.4.1", "0.4.10", "0.5.0"]);
        assert_eq!(evaluate_versions(&available, "0.4"), Some("0.4.10".into()));
    }

    #[test]
    fn range_tolerates_v_prefixed_tags() {
        let available = tags(&["v0.4.1", "v0.4.10", "v0.5.0"]);
        assert_eq!(evaluate_versions(&available, "0.4"), Some("v0.4.10".into()));
    }

    #[test]
    fn explicit_range_matches_exactly() {
        let available = tags(&["0.4.10", "0.4.12"]);
        assert_eq!(
            evaluate_versions(&available, "0.4.10"),
            Some("0.4.10".into())
        );
    }

    #[test]
    fn unsatisfied_range_yields_none() {
        let available = tags(&["0.4.1", "0.5.0"]);
        assert_eq!(evaluate_versions(&available, "1.x"), None);
    }

    #[test]
    fn non_semver_tags_are_skipped() {
        let available = tags(&["nightly", "0.4.2"]);
        assert_eq!(evaluate_versions(&available, "0.4"), Some("0.4.2".into()));
    }
}
