use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use crate::commands;
use crate::render::{RenderOptions, DEFAULT_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "sidediff")]
#[command(about = "Side-by-side view of git changes with word-level highlights", long_about = None)]
pub struct Cli {
    /// Repository to inspect (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List changed files
    List(commands::list::ListArgs),
    /// Show changed files side by side
    Show(commands::show::ShowArgs),
    /// Compare two files on disk side by side
    Compare(commands::compare::CompareArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Two-pane text for the terminal
    #[default]
    Text,
    /// Parsed rows as JSON
    Json,
}

/// Output flags shared by `show` and `compare`
#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Total output width (default: $COLUMNS, else 160)
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl DisplayArgs {
    pub fn render_options(&self) -> RenderOptions {
        let columns = std::env::var("COLUMNS").ok();
        RenderOptions {
            width: resolve_width(self.width, columns.as_deref()),
            color: !self.no_color && io::stdout().is_terminal(),
        }
    }
}

/// Explicit width, then `$COLUMNS`, then the default
fn resolve_width(flag: Option<usize>, columns: Option<&str>) -> usize {
    flag.or_else(|| {
        columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|&width| width > 0)
    })
    .unwrap_or(DEFAULT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_flag_wins() {
        assert_eq!(resolve_width(Some(80), Some("120")), 80);
    }

    #[test]
    fn test_width_from_columns() {
        assert_eq!(resolve_width(None, Some("120")), 120);
        assert_eq!(resolve_width(None, Some(" 99 ")), 99);
    }

    #[test]
    fn test_width_fallback() {
        assert_eq!(resolve_width(None, None), DEFAULT_WIDTH);
        assert_eq!(resolve_width(None, Some("wide")), DEFAULT_WIDTH);
        assert_eq!(resolve_width(None, Some("0")), DEFAULT_WIDTH);
    }

    #[test]
    fn test_parse_show_arguments() {
        let cli = Cli::try_parse_from([
            "sidediff", "--repo", "/tmp/r", "show", "--staged", "--algo", "patience", "--width",
            "100", "--format", "json", "src/lib.rs",
        ])
        .unwrap();

        assert_eq!(cli.repo, Some(PathBuf::from("/tmp/r")));
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert!(args.staged);
        assert_eq!(args.algo, git::DiffAlgo::Patience);
        assert_eq!(args.display.width, Some(100));
        assert_eq!(args.display.format, OutputFormat::Json);
        assert_eq!(args.paths, vec!["src/lib.rs".to_string()]);
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["sidediff", "show", "--algo", "histogram"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
