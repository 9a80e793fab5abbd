pub mod compare;
pub mod list;
pub mod show;

use anyhow::{Context, Result};
use git::Repository;
use std::io::Write;
use std::path::Path;

/// Open the repository at `--repo`, or the one containing the current directory
fn open_repository(repo: Option<&Path>) -> Result<Repository> {
    let dir = match repo {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    Repository::open(dir)
}

/// Write already rendered output to stdout in one go
fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write output")
}
