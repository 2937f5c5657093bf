//! Local tool cache for setup-ruff.
//!
//! Three concerns, all consumed by the download pipeline:
//!
//! - [`ToolCache`] - persistent store of unpacked tools addressed by
//!   (tool name, version, architecture), probe-without-network and
//!   register-after-extract.
//! - [`versions`] - semver helpers shared by release resolution and the
//!   cache probe.
//! - [`extract`] - tar.gz and zip extraction of downloaded assets.

mod cache;
mod error;
pub mod extract;
pub mod versions;

pub use cache::ToolCache;
pub use error::{Error, Result};
