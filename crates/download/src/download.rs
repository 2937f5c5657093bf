//! Download, verify, unpack, and cache a release of the tool.

use setup_ruff_core::{Arch, OWNER, Platform, REPO, TOOL_CACHE_NAME};
use setup_ruff_github::ReleaseSource;
use setup_ruff_tool_cache::versions::{evaluate_versions, normalize_version};
use setup_ruff_tool_cache::{ToolCache, extract};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::checksum::{AssetFetcher, ChecksumResolver, ChecksumTable, validate_checksum};
use crate::resolve::resolve_version;
use crate::{Error, Result};

/// Archive format of a release asset, fixed per platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArchiveKind {
    TarGz,
    Zip,
}

impl ArchiveKind {
    fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::PcWindowsMsvc => Self::Zip,
            _ => Self::TarGz,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::TarGz => ".tar.gz",
            Self::Zip => ".zip",
        }
    }
}

/// A release installed into the tool cache.
#[derive(Debug)]
pub struct DownloadedTool {
    /// The concrete resolved version (release tag).
    pub version: String,
    /// Cache directory holding the unpacked tool.
    pub install_dir: PathBuf,
}

/// Result of a no-network cache probe.
#[derive(Debug)]
pub struct CacheLookup {
    /// Version the specifier resolved to against the cached set, or the
    /// literal specifier when nothing cached matched.
    pub version: String,
    /// Directory of the installed tool, when present.
    pub install_dir: Option<PathBuf>,
}

/// Sequential download pipeline: resolve, fetch, verify, unpack, register.
pub struct Downloader<R, F> {
    releases: R,
    fetcher: F,
    checksums: ChecksumResolver<F>,
    cache: ToolCache,
}

impl<R, F> Downloader<R, F>
where
    R: ReleaseSource,
    F: AssetFetcher + Clone,
{
    /// Create a downloader over a release source, an asset fetcher, an
    /// explicit checksum table, and the tool cache to register into.
    pub fn new(releases: R, fetcher: F, table: ChecksumTable, cache: ToolCache) -> Self {
        let checksums = ChecksumResolver::new(table, fetcher.clone());
        Self {
            releases,
            fetcher,
            checksums,
            cache,
        }
    }

    /// Probe the tool cache without touching the network.
    ///
    /// The version specifier is evaluated against the cached versions with
    /// the same range semantics as release resolution; when nothing cached
    /// satisfies it, the literal specifier is carried through so the caller
    /// can fall back to a full download.
    #[must_use]
    pub fn try_get_from_tool_cache(&self, arch: Arch, version: &str) -> CacheLookup {
        debug!(%arch, version, "Probing tool cache");
        let cached = self.cache.find_all_versions(TOOL_CACHE_NAME, &arch.to_string());
        debug!(?cached, "Cached versions");

        let resolved =
            evaluate_versions(&cached, version).unwrap_or_else(|| version.to_string());
        let install_dir = self
            .cache
            .find(TOOL_CACHE_NAME, &resolved, &arch.to_string());
        CacheLookup {
            version: resolved,
            install_dir,
        }
    }

    /// Resolve `version`, download the matching asset for
    /// `platform`/`arch`, verify its checksum, unpack it, and register it
    /// in the tool cache.
    ///
    /// A caller-supplied `checksum` overrides the table/companion-file
    /// lookup. Any failure aborts before the cache is touched.
    pub async fn download_version(
        &self,
        platform: Platform,
        arch: Arch,
        version: &str,
        checksum: Option<&str>,
    ) -> Result<DownloadedTool> {
        let resolved = resolve_version(&self.releases, version).await?;
        let artifact = format!("{TOOL_CACHE_NAME}-{arch}-{platform}");
        let kind = ArchiveKind::for_platform(platform);
        let download_url = format!(
            "https://github.com/{OWNER}/{REPO}/releases/download/{resolved}/{artifact}{}",
            kind.extension()
        );

        info!(url = %download_url, "Downloading {TOOL_CACHE_NAME}");
        let data = self.fetcher.fetch_bytes(&download_url).await?;

        validate_checksum(
            &self.checksums,
            checksum,
            &data,
            arch,
            platform,
            &resolved,
            &download_url,
        )
        .await?;

        let staging = self.cache.staging_dir(&artifact)?;
        let tool_dir = match kind {
            ArchiveKind::TarGz => {
                // Tarballs wrap the tool in an `<artifact>` directory.
                extract::extract_tar_gz(&data, &staging)?;
                staging.join(&artifact)
            }
            ArchiveKind::Zip => {
                // Zip archives have no intermediate directory.
                extract::extract_zip(&data, &staging)?;
                staging.clone()
            }
        };

        let install_dir = self.cache.cache_dir(
            &tool_dir,
            TOOL_CACHE_NAME,
            normalize_version(&resolved),
            &arch.to_string(),
        )?;
        if staging.exists() {
            let _ = std::fs::remove_dir_all(&staging);
        }

        info!(version = %resolved, dir = %install_dir.display(), "Installed {TOOL_CACHE_NAME}");
        Ok(DownloadedTool {
            version: resolved,
            install_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::sha256_hex;
    use crate::checksum::testing::FakeFetcher;
    use async_trait::async_trait;
    use flate2::Compression;
    use flate2::write::GzEncoder;

    struct FixedReleases(Vec<String>);

    #[async_trait]
    impl ReleaseSource for FixedReleases {
        async fn latest_tag(&self) -> setup_ruff_github::Result<String> {
            self.0
                .first()
                .cloned()
                .ok_or_else(|| setup_ruff_github::Error::api("no releases"))
        }

        async fn release_tags(&self) -> setup_ruff_github::Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    fn tar_gz_with(path: &str, content: &[u8]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append_data(&mut header, path, content).unwrap();
        builder.into_inner().unwrap().finish().unwrap()
    }

    const ARTIFACT: &str = "ruff-aarch64-apple-darwin";
    const DOWNLOAD_URL: &str =
        "https://github.com/astral-sh/ruff/releases/download/v0.4.10/ruff-aarch64-apple-darwin.tar.gz";

    fn archive() -> Vec<u8> {
        tar_gz_with(&format!("{ARTIFACT}/ruff"), b"#!/bin/sh\necho ruff\n")
    }

    #[tokio::test]
    async fn download_verifies_unpacks_and_registers() {
        let root = tempfile::tempdir().unwrap();
        let data = archive();
        let digest = sha256_hex(&data);

        let fetcher = FakeFetcher::default()
            .with(DOWNLOAD_URL, data)
            .with(
                &format!("{DOWNLOAD_URL}.sha256"),
                format!("{digest}  {ARTIFACT}.tar.gz\n"),
            );
        let downloader = Downloader::new(
            FixedReleases(vec!["v0.4.10".into()]),
            fetcher,
            ChecksumTable::default(),
            ToolCache::new(root.path()),
        );

        let tool = downloader
            .download_version(Platform::AppleDarwin, Arch::Aarch64, "v0.4.10", None)
            .await
            .unwrap();

        assert_eq!(tool.version, "v0.4.10");
        let binary = tool.install_dir.join("ruff");
        assert!(binary.is_file());

        // And the probe now sees it without any network access.
        let lookup = downloader.try_get_from_tool_cache(Arch::Aarch64, "0.4");
        assert_eq!(lookup.version, "0.4.10");
        assert_eq!(lookup.install_dir, Some(tool.install_dir));
    }

    #[tokio::test]
    async fn checksum_from_table_skips_companion_fetch() {
        let root = tempfile::tempdir().unwrap();
        let data = archive();
        let digest = sha256_hex(&data);

        let fetcher = FakeFetcher::default().with(DOWNLOAD_URL, data);
        let table =
            ChecksumTable::from_entries([("aarch64-apple-darwin-0.4.10", digest.as_str())]);
        let downloader = Downloader::new(
            FixedReleases(vec!["v0.4.10".into()]),
            fetcher.clone(),
            table,
            ToolCache::new(root.path()),
        );

        downloader
            .download_version(Platform::AppleDarwin, Arch::Aarch64, "v0.4.10", None)
            .await
            .unwrap();

        // One fetch for the asset itself, none for the checksum.
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn mismatch_leaves_nothing_cached() {
        let root = tempfile::tempdir().unwrap();
        let fetcher = FakeFetcher::default().with(DOWNLOAD_URL, archive());
        let downloader = Downloader::new(
            FixedReleases(vec!["v0.4.10".into()]),
            fetcher,
            ChecksumTable::default(),
            ToolCache::new(root.path()),
        );

        let err = downloader
            .download_version(
                Platform::AppleDarwin,
                Arch::Aarch64,
                "v0.4.10",
                Some("0000000000000000000000000000000000000000000000000000000000000000"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ChecksumMismatch { .. }));
        let lookup = downloader.try_get_from_tool_cache(Arch::Aarch64, "0.4.10");
        assert_eq!(lookup.install_dir, None);
    }

    #[tokio::test]
    async fn probe_falls_back_to_literal_specifier() {
        let root = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(
            FixedReleases(vec![]),
            FakeFetcher::default(),
            ChecksumTable::default(),
            ToolCache::new(root.path()),
        );

        let lookup = downloader.try_get_from_tool_cache(Arch::Aarch64, "latest");

        assert_eq!(lookup.version, "latest");
        assert_eq!(lookup.install_dir, None);
    }
}
