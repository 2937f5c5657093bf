//! Release resolution, checksum verification, and download orchestration
//! for setup-ruff.
//!
//! The pipeline is sequential and single-shot: resolve the version
//! specifier to a concrete release tag, fetch the platform/architecture
//! asset, verify its sha256 against the known-checksums table or the
//! companion checksum file, unpack, and register in the tool cache. Any
//! failure aborts with nothing cached.
//!
//! - [`resolve_version`] - specifier to concrete tag.
//! - [`checksum`] - key derivation, table, resolver, and the table updater.
//! - [`Downloader`] - the composed pipeline plus the no-network cache
//!   probe.

pub mod checksum;
mod download;
mod error;
mod resolve;

pub use checksum::{
    AssetFetcher, ChecksumResolver, ChecksumTable, checksum_key, sha256_hex,
    update_known_checksums, validate_checksum,
};
pub use download::{CacheLookup, DownloadedTool, Downloader};
pub use error::{Error, Result};
pub use resolve::{LATEST, resolve_version};
