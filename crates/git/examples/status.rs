use anyhow::Result;
use git::{DiffAlgo, Mode, Repository};
use std::env;

fn main() -> Result<()> {
    // Use current directory if no path provided
    let path = env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let repo = Repository::open(&path)?;
    println!("Opened repository at: {}", repo.work_dir().display());

    for mode in [Mode::Worktree, Mode::Staged] {
        let status = repo.changed_files(mode)?;
        println!("\n{} ({} files):", mode, status.len());
        for entry in &status.entries {
            println!("  {} {}", entry.kind.code(), entry.path);
        }

        // Print the raw diff of the first file
        if let Some(first) = status.entries.first() {
            println!("\nRaw diff of {}:", first.path);
            print!("{}", repo.file_diff(mode, DiffAlgo::default(), &first.path)?);
        }
    }

    Ok(())
}
