//! Release tag enumeration against the GitHub releases API.

use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

use crate::{Error, Result};

/// Source of published release tags.
///
/// The two lookups mirror what the release host offers: a full paginated
/// enumeration, and a cheap single-item "most recent release" query. Version
/// resolution uses the latter for `latest` so the common case never pages
/// through the whole release history.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Tag of the most recent published release.
    async fn latest_tag(&self) -> Result<String>;

    /// Tags of all published releases, across all pages.
    async fn release_tags(&self) -> Result<Vec<String>>;
}

/// [`ReleaseSource`] backed by the GitHub REST API.
pub struct GitHubReleases {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubReleases {
    /// Create a client for `owner/repo`, authenticated when a non-empty
    /// token is given. Unauthenticated requests work but are rate-limited
    /// aggressively on shared CI runners.
    pub fn new(owner: &str, repo: &str, token: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.personal_token(token.to_string());
        }
        let client = builder.build().map_err(|e| Error::client(e.to_string()))?;
        Ok(Self {
            client,
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Download URLs of every `.sha256` companion asset, oldest release
    /// first. Input to the known-checksums table updater.
    pub async fn checksum_asset_urls(&self) -> Result<Vec<String>> {
        let page = self
            .client
            .repos(&self.owner, &self.repo)
            .releases()
            .list()
            .per_page(100)
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;
        let releases = self
            .client
            .all_pages(page)
            .await
            .map_err(|e| Error::api(e.to_string()))?;

        debug!(releases = releases.len(), "Listed releases for checksum assets");

        // The API lists newest first; the generated table reads better in
        // publication order.
        let urls = releases
            .into_iter()
            .rev()
            .flat_map(|release| release.assets)
            .filter(|asset| asset.name.ends_with(setup_ruff_core::CHECKSUM_SUFFIX))
            .map(|asset| asset.browser_download_url.to_string())
            .collect();
        Ok(urls)
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleases {
    async fn latest_tag(&self) -> Result<String> {
        let release = self
            .client
            .repos(&self.owner, &self.repo)
            .releases()
            .get_latest()
            .await
            .map_err(|e| Error::api(e.to_string()))?;
        debug!(tag = %release.tag_name, "Resolved latest release");
        Ok(release.tag_name)
    }

    async fn release_tags(&self) -> Result<Vec<String>> {
        let page = self
            .client
            .repos(&self.owner, &self.repo)
            .releases()
            .list()
            .per_page(100)
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;
        let releases = self
            .client
            .all_pages(page)
            .await
            .map_err(|e| Error::api(e.to_string()))?;
        debug!(count = releases.len(), "Enumerated release tags");
        Ok(releases.into_iter().map(|r| r.tag_name).collect())
    }
}
