//! Raw asset fetching over HTTPS.

use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::{Error, Result};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("setup-ruff/", env!("CARGO_PKG_VERSION"));

/// HTTP client for release asset downloads.
///
/// Release assets are plain HTTPS GETs against predictable URLs; no API
/// client is involved. A bearer token is attached when available so private
/// mirrors and rate-limited runners keep working.
#[derive(Clone)]
pub struct AssetClient {
    client: reqwest::Client,
    token: Option<String>,
}

impl AssetClient {
    /// Create a client, optionally authenticating with `token`.
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::client(e.to_string()))?;
        Ok(Self {
            client,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!(%url, "Fetching asset");
        let response = self
            .request(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))?;
        if !response.status().is_success() {
            return Err(Error::status(url, response.status().as_u16()));
        }
        Ok(response)
    }

    /// Fetch an asset's raw bytes.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))?;
        debug!(%url, len = bytes.len(), "Fetched asset");
        Ok(bytes.to_vec())
    }

    /// Fetch an asset's content as UTF-8 text.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        response
            .text()
            .await
            .map_err(|e| Error::fetch(url, e.to_string()))
    }
}
