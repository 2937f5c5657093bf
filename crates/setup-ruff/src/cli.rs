//! Command-line interface definition and CLI-facing error type.

use clap::{Parser, Subcommand};
use miette::Diagnostic;
use setup_ruff_core::{Arch, Platform};
use std::path::PathBuf;
use thiserror::Error;

/// Install a pinned ruff release in CI.
#[derive(Parser, Debug)]
#[command(name = "setup-ruff", version, about)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve, download, verify, and cache a ruff release.
    Install {
        /// Version to install: an exact version, a semver range, or "latest".
        #[arg(long, default_value = "latest", env = "SETUP_RUFF_VERSION")]
        version: String,

        /// Expected sha256 of the downloaded asset; overrides the
        /// known-checksums table and the companion checksum file.
        #[arg(long, env = "SETUP_RUFF_CHECKSUM")]
        checksum: Option<String>,

        /// GitHub token used for API calls and asset downloads.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        github_token: Option<String>,

        /// Target platform; defaults to the current host.
        #[arg(long)]
        platform: Option<Platform>,

        /// Target architecture; defaults to the current host.
        #[arg(long)]
        arch: Option<Arch>,
    },

    /// Regenerate the known-checksums table from the published releases.
    ///
    /// Maintenance operation; not part of the install path.
    UpdateKnownChecksums {
        /// Path of the generated source file to rewrite.
        #[arg(long, default_value = "crates/download/src/checksum/known_checksums.rs")]
        output: PathBuf,

        /// GitHub token used for API calls and asset downloads.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        github_token: Option<String>,
    },
}

/// CLI-facing error with a diagnostic rendering.
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Install or update pipeline failure.
    #[error(transparent)]
    #[diagnostic(code(setup_ruff::download))]
    Download(#[from] setup_ruff_download::Error),

    /// Release host access failure.
    #[error(transparent)]
    #[diagnostic(code(setup_ruff::github))]
    GitHub(#[from] setup_ruff_github::Error),

    /// Tool cache failure.
    #[error(transparent)]
    #[diagnostic(code(setup_ruff::cache))]
    Cache(#[from] setup_ruff_tool_cache::Error),

    /// Environment file plumbing failure.
    #[error("Failed to write {file}: {source}")]
    #[diagnostic(
        code(setup_ruff::env_file),
        help("GITHUB_PATH/GITHUB_OUTPUT must point at writable files on a runner")
    )]
    EnvFile {
        /// The environment file being appended to.
        file: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
