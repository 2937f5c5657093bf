//! GitHub access for setup-ruff.
//!
//! Two concerns live here, matching the two external interfaces of the
//! release host:
//!
//! - [`ReleaseSource`] / [`GitHubReleases`] - enumeration of published
//!   release tags through the GitHub REST API (paginated listing plus a
//!   targeted latest-release lookup).
//! - [`AssetClient`] - plain HTTPS fetches of release asset content, with
//!   optional bearer-token authentication.

mod assets;
mod error;
mod releases;

pub use assets::AssetClient;
pub use error::{Error, Result};
pub use releases::{GitHubReleases, ReleaseSource};
