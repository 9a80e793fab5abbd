//! List command
//!
//! Usage: sidediff list [--staged]

use anyhow::Result;
use clap::Args;
use git::Mode;
use std::path::Path;

use super::{open_repository, write_stdout};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// List staged changes instead of working-tree changes
    #[arg(long)]
    pub staged: bool,
}

/// Execute list command
pub fn execute(repo: Option<&Path>, args: ListArgs) -> Result<()> {
    let repo = open_repository(repo)?;
    let mode = if args.staged { Mode::Staged } else { Mode::Worktree };

    let status = repo.changed_files(mode)?;
    let mut out = String::new();
    for entry in &status.entries {
        out.push_str(&format!("{} {}\n", entry.kind.code(), entry.path));
    }

    write_stdout(&out)
}
