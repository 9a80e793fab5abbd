// Git integration for sidediff
// Lists changed files and renders their raw unified diffs for the parser

mod mode;
mod repository;
mod status;

pub use mode::{DiffAlgo, Mode};
pub use repository::{friendly_error, Repository, NOT_A_REPOSITORY};
pub use status::{StatusEntry, StatusKind, StatusList};
