//! Local versioned tool cache.
//!
//! Layout matches the hosted-runner convention so cached tools survive across
//! jobs on self-hosted runners: `<root>/<tool>/<version>/<arch>/` holds the
//! unpacked tool, with a sibling `<arch>.complete` marker written last.
//! A directory without its marker is a torn registration and is treated as
//! absent.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::versions::{is_explicit_version, normalize_version};
use crate::{Error, Result};

/// Environment variable naming the cache root on hosted runners.
const TOOL_CACHE_ENV: &str = "RUNNER_TOOL_CACHE";

/// Marker filename suffix for fully registered entries.
const COMPLETE_SUFFIX: &str = ".complete";

/// Cache of unpacked tools addressed by (tool name, version, architecture).
#[derive(Debug, Clone)]
pub struct ToolCache {
    root: PathBuf,
}

impl ToolCache {
    /// Create a cache rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a cache rooted at `RUNNER_TOOL_CACHE`, falling back to the
    /// platform cache directory outside a runner.
    pub fn from_env() -> Result<Self> {
        if let Ok(dir) = std::env::var(TOOL_CACHE_ENV)
            && !dir.is_empty()
        {
            return Ok(Self::new(dir));
        }
        let base = dirs::cache_dir()
            .ok_or_else(|| Error::configuration("no platform cache directory"))?;
        Ok(Self::new(base.join("setup-ruff").join("tool-cache")))
    }

    /// Root directory of the cache.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn version_dir(&self, tool: &str, version: &str) -> PathBuf {
        self.root.join(tool).join(normalize_version(version))
    }

    fn marker(&self, tool: &str, version: &str, arch: &str) -> PathBuf {
        self.version_dir(tool, version)
            .join(format!("{arch}{COMPLETE_SUFFIX}"))
    }

    /// Look up a fully registered entry, returning its directory.
    #[must_use]
    pub fn find(&self, tool: &str, version: &str, arch: &str) -> Option<PathBuf> {
        let dir = self.version_dir(tool, version).join(arch);
        if dir.is_dir() && self.marker(tool, version, arch).is_file() {
            debug!(tool, version, arch, dir = %dir.display(), "Tool cache hit");
            Some(dir)
        } else {
            debug!(tool, version, arch, "Tool cache miss");
            None
        }
    }

    /// All fully registered versions of a tool for an architecture.
    ///
    /// Directory names that are not explicit versions are ignored.
    #[must_use]
    pub fn find_all_versions(&self, tool: &str, arch: &str) -> Vec<String> {
        let tool_dir = self.root.join(tool);
        let Ok(entries) = std::fs::read_dir(&tool_dir) else {
            return Vec::new();
        };
        let mut versions: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|version| is_explicit_version(version))
            .filter(|version| self.find(tool, version, arch).is_some())
            .collect();
        versions.sort();
        versions
    }

    /// Register an unpacked tool directory in the cache.
    ///
    /// The source directory is moved (or copied, across filesystems) to the
    /// cache slot; any previous content of the slot is replaced. The
    /// completion marker is written only after the content is in place.
    pub fn cache_dir(
        &self,
        source: &Path,
        tool: &str,
        version: &str,
        arch: &str,
    ) -> Result<PathBuf> {
        let version_dir = self.version_dir(tool, version);
        let dest = version_dir.join(arch);
        debug!(
            source = %source.display(),
            dest = %dest.display(),
            "Registering tool in cache"
        );

        std::fs::create_dir_all(&version_dir).map_err(|e| Error::io(e, &version_dir, "create"))?;
        if dest.exists() {
            std::fs::remove_dir_all(&dest).map_err(|e| Error::io(e, &dest, "remove"))?;
        }
        let marker = self.marker(tool, version, arch);
        if marker.exists() {
            std::fs::remove_file(&marker).map_err(|e| Error::io(e, &marker, "remove"))?;
        }

        if std::fs::rename(source, &dest).is_err() {
            copy_dir_all(source, &dest)?;
            std::fs::remove_dir_all(source).map_err(|e| Error::io(e, source, "remove"))?;
        }

        std::fs::write(&marker, b"").map_err(|e| Error::io(e, &marker, "write"))?;
        Ok(dest)
    }

    /// Create a fresh staging directory under the cache root, on the same
    /// filesystem as the final slot so registration is a rename.
    pub fn staging_dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.root.join(".staging").join(name);
        if dir.exists() {
            std::fs::remove_dir_all(&dir).map_err(|e| Error::io(e, &dir, "remove"))?;
        }
        std::fs::create_dir_all(&dir).map_err(|e| Error::io(e, &dir, "create"))?;
        Ok(dir)
    }
}

fn copy_dir_all(source: &Path, dest: &Path) -> Result<()> {
    std::fs::create_dir_all(dest).map_err(|e| Error::io(e, dest, "create"))?;
    let entries = std::fs::read_dir(source).map_err(|e| Error::io(e, source, "read"))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(e, source, "read"))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io(e, &from, "stat"))?;
        if file_type.is_dir() {
            copy_dir_all(&from, &to)?;
        } else {
            std::fs::copy(&from, &to).map_err(|e| Error::io(e, &from, "copy"))?;
        }
    }
    Ok(())
}
