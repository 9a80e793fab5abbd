//! Show command
//!
//! Usage: sidediff show [--staged] [--algo <ALGO>] [--watch] [PATH...]

use anyhow::{bail, Context, Result};
use clap::Args;
use git::{DiffAlgo, Mode, Repository};
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use split_diff::{parse_unified_with, DiffStats, ParseOptions, ParsedDiff};
use std::path::Path;

use super::{open_repository, write_stdout};
use crate::cli::{DisplayArgs, OutputFormat};
use crate::render::{render_file, RenderOptions};
use crate::watcher::RepoWatcher;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Show staged changes instead of working-tree changes
    #[arg(long)]
    pub staged: bool,

    /// Line diff algorithm (myers, patience or minimal)
    #[arg(long, default_value = "myers")]
    pub algo: DiffAlgo,

    /// Keep file header lines (diff --git, index, ---, +++)
    #[arg(long)]
    pub headers: bool,

    /// Re-render whenever the repository changes
    #[arg(long)]
    pub watch: bool,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Files to show (default: every changed file)
    pub paths: Vec<String>,
}

/// A parsed file ready for output
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub status: char,
    pub stats: DiffStats,
    #[serde(flatten)]
    pub diff: ParsedDiff,
}

impl FileReport {
    pub fn new(path: String, status: char, diff: ParsedDiff) -> Self {
        Self {
            path,
            status,
            stats: diff.stats(),
            diff,
        }
    }
}

/// Execute show command
pub fn execute(repo: Option<&Path>, args: ShowArgs) -> Result<()> {
    let repo = open_repository(repo)?;
    let mode = if args.staged { Mode::Staged } else { Mode::Worktree };
    let options = ParseOptions {
        hide_file_headers: !args.headers,
        ..ParseOptions::default()
    };
    let render_options = args.display.render_options();

    if !args.watch {
        let output = render_changes(&repo, mode, &args, &options, &render_options)?;
        return write_stdout(&output);
    }

    if args.display.format != OutputFormat::Text {
        bail!("--watch only supports text output");
    }

    let watcher = RepoWatcher::new(repo.work_dir())?;
    loop {
        let output = render_changes(&repo, mode, &args, &options, &render_options)?;
        write_stdout(&format!("{}{}", CLEAR_SCREEN, output))?;

        loop {
            match watcher.wait_for_change() {
                Some(scope) if scope.affects(mode) => break,
                Some(scope) => debug!("Skipping refresh for {:?}", scope),
                None => return Ok(()),
            }
        }
        info!("Refreshing {} view", mode);
    }
}

fn render_changes(
    repo: &Repository,
    mode: Mode,
    args: &ShowArgs,
    options: &ParseOptions,
    render_options: &RenderOptions,
) -> Result<String> {
    let reports = collect_reports(repo, mode, args.algo, &args.paths, options)?;

    match args.display.format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&reports).context("Failed to serialize diff")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            if reports.is_empty() {
                return Ok(format!("No changes ({}).\n", mode));
            }
            let files: Vec<String> = reports
                .iter()
                .map(|report| {
                    render_file(&report.path, report.status, &report.diff, render_options)
                })
                .collect();
            Ok(files.join("\n"))
        }
    }
}

/// Fetch raw diffs in order, then parse them in parallel
fn collect_reports(
    repo: &Repository,
    mode: Mode,
    algo: DiffAlgo,
    paths: &[String],
    options: &ParseOptions,
) -> Result<Vec<FileReport>> {
    let status = repo.changed_files(mode)?;

    let targets: Vec<(String, char)> = if paths.is_empty() {
        status
            .entries
            .iter()
            .map(|entry| (entry.path.clone(), entry.kind.code()))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| {
                let code = status
                    .get_file_status(path)
                    .map_or(' ', |entry| entry.kind.code());
                (path.clone(), code)
            })
            .collect()
    };

    // libgit2 handles are not Sync, so the raw text is fetched sequentially
    let mut raw = Vec::with_capacity(targets.len());
    for (path, code) in targets {
        let text = repo.file_diff(mode, algo, &path)?;
        raw.push((path, code, text));
    }
    debug!("Fetched {} raw diffs in {} mode", raw.len(), mode);

    Ok(raw
        .into_par_iter()
        .map(|(path, code, text)| {
            let diff = parse_unified_with(&text, options);
            FileReport::new(path, code, diff)
        })
        .collect())
}
