//! sidediff
//!
//! Side-by-side terminal view of git changes

use clap::Parser;
use env_logger::Env;

mod cli;
mod commands;
mod render;
mod watcher;

use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Parsed arguments: {:?}", cli);

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(cli.repo.as_deref(), args),
        Commands::Show(args) => commands::show::execute(cli.repo.as_deref(), args),
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("{}", git::friendly_error(&e));
        std::process::exit(1);
    }
}
