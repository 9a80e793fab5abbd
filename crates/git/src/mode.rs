use anyhow::{anyhow, Error};
use derive_more::Display;
use git2::DiffOptions;
use std::str::FromStr;

/// Which side of the index a diff is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Mode {
    /// Index to working directory, untracked files included
    #[default]
    #[display(fmt = "WORKTREE")]
    Worktree,
    /// HEAD to index
    #[display(fmt = "STAGED")]
    Staged,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Worktree => Mode::Staged,
            Mode::Staged => Mode::Worktree,
        }
    }
}

/// Line diff algorithm used by libgit2 when producing the raw diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum DiffAlgo {
    #[default]
    #[display(fmt = "myers")]
    Myers,
    #[display(fmt = "patience")]
    Patience,
    #[display(fmt = "minimal")]
    Minimal,
}

impl DiffAlgo {
    /// Cycle to the next algorithm, wrapping around
    pub fn next(self) -> Self {
        match self {
            DiffAlgo::Myers => DiffAlgo::Patience,
            DiffAlgo::Patience => DiffAlgo::Minimal,
            DiffAlgo::Minimal => DiffAlgo::Myers,
        }
    }

    pub(crate) fn apply(self, opts: &mut DiffOptions) {
        opts.patience(self == DiffAlgo::Patience)
            .minimal(self == DiffAlgo::Minimal);
    }
}

impl FromStr for DiffAlgo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "myers" | "default" => Ok(DiffAlgo::Myers),
            "patience" => Ok(DiffAlgo::Patience),
            "minimal" => Ok(DiffAlgo::Minimal),
            other => Err(anyhow!(
                "unknown diff algorithm '{}' (expected myers, patience or minimal)",
                other
            )),
        }
    }
}
