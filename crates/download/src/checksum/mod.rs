//! Checksum resolution and verification for downloaded release assets.
//!
//! Expected checksums come from two places, consulted in order:
//!
//! 1. The generated known-checksums table compiled into this crate
//!    (fast path, no network).
//! 2. The companion `.sha256` file published next to each release asset,
//!    fetched on demand.
//!
//! The table is only data; it is loaded into an explicit [`ChecksumTable`]
//! and handed to the [`ChecksumResolver`] at construction, so tests (and the
//! table updater) substitute their own.

mod key;
mod known_checksums;
mod update;

pub use key::checksum_key;
pub use update::update_known_checksums;

use async_trait::async_trait;
use setup_ruff_core::{Arch, CHECKSUM_SUFFIX, Platform};
use setup_ruff_tool_cache::versions::normalize_version;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::debug;

use crate::{Error, Result};

/// Fetches release asset content.
///
/// The one seam the checksum path needs from the network. Production code
/// uses [`setup_ruff_github::AssetClient`]; tests count calls.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch an asset's raw bytes.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;

    /// Fetch an asset's content as UTF-8 text.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl AssetFetcher for setup_ruff_github::AssetClient {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        Ok(self.get_bytes(url).await?)
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        Ok(self.get_text(url).await?)
    }
}

/// Immutable mapping from checksum key to hex digest.
#[derive(Debug, Clone, Default)]
pub struct ChecksumTable {
    entries: HashMap<String, String>,
}

impl ChecksumTable {
    /// The table generated into this crate by the updater.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_entries(
            known_checksums::KNOWN_CHECKSUMS
                .iter()
                .map(|&(key, checksum)| (key, checksum)),
        )
    }

    /// Build a table from key/checksum pairs.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, checksum)| (key.to_string(), checksum.to_string()))
                .collect(),
        }
    }

    /// Look up the checksum for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves the expected checksum for an asset.
pub struct ChecksumResolver<F> {
    table: ChecksumTable,
    fetcher: F,
}

impl<F: AssetFetcher> ChecksumResolver<F> {
    /// Create a resolver over an explicit table and fetcher.
    pub fn new(table: ChecksumTable, fetcher: F) -> Self {
        Self { table, fetcher }
    }

    /// Resolve the checksum for `key`, consulting the table first and
    /// fetching the checksum file at `download_url` only on a miss.
    ///
    /// The checksum file's first whitespace-delimited token is the digest.
    /// Fetch failures propagate; there is no retry.
    pub async fn resolve(&self, key: &str, download_url: &str) -> Result<String> {
        if let Some(checksum) = self.table.get(key) {
            debug!(key, "Checksum found in known-checksums table");
            return Ok(checksum.to_string());
        }

        debug!(key, url = download_url, "Checksum not in table, fetching");
        let content = self.fetcher.fetch_text(download_url).await?;
        content
            .split_whitespace()
            .next()
            .map(ToString::to_string)
            .ok_or_else(|| Error::EmptyChecksumFile {
                url: download_url.to_string(),
            })
    }
}

/// Hex-encoded sha256 digest of `data`.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Verify downloaded asset bytes against their expected checksum.
///
/// A caller-supplied checksum takes precedence and is compared directly;
/// otherwise the expected digest is resolved from the table or the asset's
/// companion checksum file. A mismatch is fatal and the artifact must not
/// be cached.
pub async fn validate_checksum<F: AssetFetcher>(
    resolver: &ChecksumResolver<F>,
    supplied: Option<&str>,
    data: &[u8],
    arch: Arch,
    platform: Platform,
    version: &str,
    download_url: &str,
) -> Result<()> {
    let expected = match supplied {
        Some(checksum) => checksum.to_string(),
        None => {
            let key = format!("{arch}-{platform}-{}", normalize_version(version));
            resolver
                .resolve(&key, &format!("{download_url}{CHECKSUM_SUFFIX}"))
                .await?
        }
    };

    let actual = sha256_hex(data);
    if !actual.eq_ignore_ascii_case(&expected) {
        return Err(Error::checksum_mismatch(expected, actual));
    }
    debug!(checksum = %actual, "Checksum validated");
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Counting fetcher used across the crate's tests.

    use super::AssetFetcher;
    use crate::{Error, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory fetcher that records how many fetches were made.
    #[derive(Clone, Default)]
    pub struct FakeFetcher {
        responses: HashMap<String, Vec<u8>>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeFetcher {
        pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
            self.responses.insert(url.to_string(), body.into());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AssetFetcher for FakeFetcher {
        async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| Error::Fetch(setup_ruff_github::Error::status(url, 404)))
        }

        async fn fetch_text(&self, url: &str) -> Result<String> {
            let bytes = self.fetch_bytes(url).await?;
            String::from_utf8(bytes)
                .map_err(|e| Error::Fetch(setup_ruff_github::Error::fetch(url, e.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeFetcher;
    use super::*;

    // sha256 of the literal bytes `hello world`
    const HELLO_SHA256: &str =
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    #[tokio::test]
    async fn table_hit_performs_no_fetch() {
        let table = ChecksumTable::from_entries([("aarch64-apple-darwin-0.4.10", "abc123")]);
        let fetcher = FakeFetcher::default();
        let resolver = ChecksumResolver::new(table, fetcher.clone());

        let checksum = resolver
            .resolve("aarch64-apple-darwin-0.4.10", "https://example.com/x.sha256")
            .await
            .unwrap();

        assert_eq!(checksum, "abc123");
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn table_miss_fetches_first_token() {
        let url = "https://example.com/ruff.tar.gz.sha256";
        let fetcher = FakeFetcher::default().with(url, "deadbeef  ruff.tar.gz\n");
        let resolver = ChecksumResolver::new(ChecksumTable::default(), fetcher.clone());

        let checksum = resolver.resolve("missing-key", url).await.unwrap();

        assert_eq!(checksum, "deadbeef");
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn empty_checksum_file_is_an_error() {
        let url = "https://example.com/empty.sha256";
        let fetcher = FakeFetcher::default().with(url, "  \n");
        let resolver = ChecksumResolver::new(ChecksumTable::default(), fetcher);

        assert!(matches!(
            resolver.resolve("missing-key", url).await,
            Err(Error::EmptyChecksumFile { .. })
        ));
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let resolver = ChecksumResolver::new(ChecksumTable::default(), FakeFetcher::default());

        assert!(matches!(
            resolver
                .resolve("missing-key", "https://example.com/nope")
                .await,
            Err(Error::Fetch(_))
        ));
    }

    #[test]
    fn sha256_hex_matches_known_digest() {
        assert_eq!(sha256_hex(b"hello world"), HELLO_SHA256);
    }

    #[tokio::test]
    async fn supplied_checksum_takes_precedence() {
        let fetcher = FakeFetcher::default();
        let resolver = ChecksumResolver::new(ChecksumTable::default(), fetcher.clone());

        validate_checksum(
            &resolver,
            Some(HELLO_SHA256),
            b"hello world",
            Arch::Aarch64,
            Platform::AppleDarwin,
            "v0.4.10",
            "https://example.com/ruff.tar.gz",
        )
        .await
        .unwrap();

        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn mismatch_is_fatal() {
        let resolver = ChecksumResolver::new(ChecksumTable::default(), FakeFetcher::default());

        let err = validate_checksum(
            &resolver,
            Some("0000000000000000000000000000000000000000000000000000000000000000"),
            b"hello world",
            Arch::Aarch64,
            Platform::AppleDarwin,
            "0.4.10",
            "https://example.com/ruff.tar.gz",
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::ChecksumMismatch { .. }));
    }

    #[tokio::test]
    async fn resolved_checksum_uses_normalized_version_key() {
        let table = ChecksumTable::from_entries([("aarch64-apple-darwin-0.4.10", HELLO_SHA256)]);
        let fetcher = FakeFetcher::default();
        let resolver = ChecksumResolver::new(table, fetcher.clone());

        validate_checksum(
            &resolver,
            None,
            b"hello world",
            Arch::Aarch64,
            Platform::AppleDarwin,
            "v0.4.10",
            "https://example.com/ruff.tar.gz",
        )
        .await
        .unwrap();

        assert_eq!(fetcher.calls(), 0);
    }

    #[test]
    fn bundled_table_is_loaded() {
        assert!(!ChecksumTable::bundled().is_empty());
    }
}
