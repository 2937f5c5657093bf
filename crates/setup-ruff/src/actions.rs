//! GitHub Actions environment-file plumbing.
//!
//! On a runner, `GITHUB_PATH` and `GITHUB_OUTPUT` name files that collect
//! PATH additions and step outputs. Outside a runner the variables are
//! absent and these helpers do nothing.

use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::cli::CliError;

fn append_line(env_var: &str, line: &str) -> Result<(), CliError> {
    let Ok(file) = std::env::var(env_var) else {
        return Ok(());
    };
    if file.is_empty() {
        return Ok(());
    }
    let mut handle = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&file)
        .map_err(|source| CliError::EnvFile {
            file: file.clone(),
            source,
        })?;
    writeln!(handle, "{line}").map_err(|source| CliError::EnvFile { file, source })?;
    Ok(())
}

/// Prepend the installed tool directory to the job's PATH.
pub fn add_to_path(dir: &Path) -> Result<(), CliError> {
    debug!(dir = %dir.display(), "Adding install dir to GITHUB_PATH");
    append_line("GITHUB_PATH", &dir.display().to_string())
}

/// Publish the resolved version and install directory as step outputs.
pub fn set_outputs(version: &str, dir: &Path) -> Result<(), CliError> {
    append_line("GITHUB_OUTPUT", &format!("ruff-version={version}"))?;
    append_line("GITHUB_OUTPUT", &format!("ruff-dir={}", dir.display()))
}
