//! Platform and architecture identification for release assets.
//!
//! Upstream names its release assets after Rust target triples, split into an
//! architecture part and a platform part: `ruff-<arch>-<platform>`. Both
//! types render exactly the strings that appear in asset filenames.

use serde::{Deserialize, Serialize};

/// Platform part of the release asset name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// macOS.
    AppleDarwin,
    /// Linux with glibc.
    UnknownLinuxGnu,
    /// Linux with musl.
    UnknownLinuxMusl,
    /// Windows with the MSVC toolchain.
    PcWindowsMsvc,
}

impl Platform {
    /// Get the platform of the current host.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        return Self::AppleDarwin;
        #[cfg(all(target_os = "linux", target_env = "musl"))]
        return Self::UnknownLinuxMusl;
        #[cfg(all(target_os = "linux", not(target_env = "musl")))]
        return Self::UnknownLinuxGnu;
        #[cfg(target_os = "windows")]
        return Self::PcWindowsMsvc;
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        compile_error!("Unsupported OS");
    }

    /// Parse from the asset-name form, e.g. `"unknown-linux-gnu"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "apple-darwin" => Some(Self::AppleDarwin),
            "unknown-linux-gnu" => Some(Self::UnknownLinuxGnu),
            "unknown-linux-musl" => Some(Self::UnknownLinuxMusl),
            "pc-windows-msvc" => Some(Self::PcWindowsMsvc),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AppleDarwin => write!(f, "apple-darwin"),
            Self::UnknownLinuxGnu => write!(f, "unknown-linux-gnu"),
            Self::UnknownLinuxMusl => write!(f, "unknown-linux-musl"),
            Self::PcWindowsMsvc => write!(f, "pc-windows-msvc"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown platform: {s}"))
    }
}

/// CPU architecture part of the release asset name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arch {
    /// 64-bit ARM.
    Aarch64,
    /// 64-bit x86.
    X86_64,
    /// 32-bit x86.
    I686,
    /// 32-bit ARM with hardware floats.
    Armv7,
}

impl Arch {
    /// Get the architecture of the current host.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(target_arch = "aarch64")]
        return Self::Aarch64;
        #[cfg(target_arch = "x86_64")]
        return Self::X86_64;
        #[cfg(target_arch = "x86")]
        return Self::I686;
        #[cfg(target_arch = "arm")]
        return Self::Armv7;
        #[cfg(not(any(
            target_arch = "aarch64",
            target_arch = "x86_64",
            target_arch = "x86",
            target_arch = "arm"
        )))]
        compile_error!("Unsupported architecture");
    }

    /// Parse from the asset-name form, e.g. `"aarch64"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "aarch64" => Some(Self::Aarch64),
            "x86_64" => Some(Self::X86_64),
            "i686" => Some(Self::I686),
            "armv7" => Some(Self::Armv7),
            _ => None,
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aarch64 => write!(f, "aarch64"),
            Self::X86_64 => write!(f, "x86_64"),
            Self::I686 => write!(f, "i686"),
            Self::Armv7 => write!(f, "armv7"),
        }
    }
}

impl std::str::FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown architecture: {s}"))
    }
}
