//! Compare command
//!
//! Usage: sidediff compare <OLD> <NEW> [--context <N>]

use anyhow::{Context, Result};
use clap::Args;
use split_diff::{parse_unified_with, ParseOptions, TextDiff};
use std::fs;
use std::path::PathBuf;

use super::write_stdout;
use super::show::FileReport;
use crate::cli::{DisplayArgs, OutputFormat};
use crate::render::render_file;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Old version of the file
    pub old: PathBuf,

    /// New version of the file
    pub new: PathBuf,

    /// Unchanged lines shown around each change
    #[arg(long, default_value_t = 3)]
    pub context: usize,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<()> {
    let old_text = fs::read_to_string(&args.old)
        .with_context(|| format!("Failed to read {}", args.old.display()))?;
    let new_text = fs::read_to_string(&args.new)
        .with_context(|| format!("Failed to read {}", args.new.display()))?;

    let old_name = args.old.display().to_string();
    let new_name = args.new.display().to_string();
    let unified =
        TextDiff::unified_diff_with_header(&old_text, &new_text, &old_name, &new_name, args.context);

    let options = ParseOptions {
        hide_file_headers: true,
        ..ParseOptions::default()
    };
    let diff = parse_unified_with(&unified, &options);
    let status = if diff.is_empty() { ' ' } else { 'M' };
    let report = FileReport::new(format!("{} -> {}", old_name, new_name), status, diff);

    let output = match args.display.format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&report).context("Failed to serialize diff")?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render_file(
            &report.path,
            report.status,
            &report.diff,
            &args.display.render_options(),
        ),
    };

    write_stdout(&output)
}
