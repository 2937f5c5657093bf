//! setup-ruff CLI.
//!
//! Single-shot installer for the ruff binary in CI: resolves a version
//! specifier against the upstream GitHub releases, reuses the local tool
//! cache when possible, and otherwise downloads, verifies, unpacks, and
//! registers the release. Also carries the offline maintenance command that
//! regenerates the known-checksums table.

// CLI binary reports its one result on stdout.
#![allow(clippy::print_stdout)]

mod actions;
mod cli;

use clap::Parser;
use setup_ruff_core::{Arch, OWNER, Platform, REPO};
use setup_ruff_download::{ChecksumTable, Downloader, update_known_checksums};
use setup_ruff_github::{AssetClient, GitHubReleases};
use setup_ruff_tool_cache::ToolCache;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, CliError, Commands};

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Install {
            version,
            checksum,
            github_token,
            platform,
            arch,
        } => {
            install(
                version,
                checksum,
                github_token,
                platform.unwrap_or_else(Platform::current),
                arch.unwrap_or_else(Arch::current),
            )
            .await?;
        }
        Commands::UpdateKnownChecksums {
            output,
            github_token,
        } => {
            update(output, github_token).await?;
        }
    }
    Ok(())
}

async fn install(
    version: String,
    checksum: Option<String>,
    token: Option<String>,
    platform: Platform,
    arch: Arch,
) -> Result<(), CliError> {
    let releases = GitHubReleases::new(OWNER, REPO, token.as_deref())?;
    let fetcher = AssetClient::new(token)?;
    let cache = ToolCache::from_env()?;
    let downloader = Downloader::new(releases, fetcher, ChecksumTable::bundled(), cache);

    let lookup = downloader.try_get_from_tool_cache(arch, &version);
    let (resolved, install_dir) = match lookup.install_dir {
        Some(dir) => {
            info!(version = %lookup.version, "Found ruff in tool cache");
            (lookup.version, dir)
        }
        None => {
            let tool = downloader
                .download_version(platform, arch, &version, checksum.as_deref())
                .await?;
            (tool.version, tool.install_dir)
        }
    };

    actions::add_to_path(&install_dir)?;
    actions::set_outputs(&resolved, &install_dir)?;
    println!("{}", install_dir.display());
    Ok(())
}

async fn update(output: PathBuf, token: Option<String>) -> Result<(), CliError> {
    let releases = GitHubReleases::new(OWNER, REPO, token.as_deref())?;
    let urls = releases.checksum_asset_urls().await?;
    info!(count = urls.len(), "Collected checksum asset URLs");

    let fetcher = AssetClient::new(token)?;
    let resolver = setup_ruff_download::ChecksumResolver::new(ChecksumTable::bundled(), fetcher);
    update_known_checksums(&output, &urls, &resolver).await?;
    Ok(())
}
