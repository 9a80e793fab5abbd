use anyhow::{anyhow, Context, Result};
use git2::{
    Diff, DiffFormat, DiffOptions, ErrorClass, ErrorCode, Repository as Git2Repository,
    StatusOptions, Tree,
};
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::mode::{DiffAlgo, Mode};
use crate::status::{StatusEntry, StatusKind, StatusList};

/// Message shown when the tool is started outside a repository
pub const NOT_A_REPOSITORY: &str = "Not a git repository. Run sidediff inside a git repository.";

const CONTEXT_LINES: u32 = 3;

/// A wrapper around git2::Repository with additional functionality
pub struct Repository {
    /// The underlying git2 repository
    inner: Git2Repository,
    /// The repository's working directory
    work_dir: PathBuf,
}

impl Repository {
    /// Open the git repository containing `path`, searching upwards
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repository::discover(path)
            .with_context(|| format!("Failed to discover git repository at {}", path.display()))?;

        let work_dir = repo
            .workdir()
            .ok_or_else(|| anyhow!("Repository has no working directory"))?
            .to_path_buf();

        debug!("Opened repository at {}", work_dir.display());
        Ok(Self {
            inner: repo,
            work_dir,
        })
    }

    /// Get the repository's working directory
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Files with changes visible in `mode`, sorted by path
    pub fn changed_files(&self, mode: Mode) -> Result<StatusList> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(mode == Mode::Worktree)
            .recurse_untracked_dirs(mode == Mode::Worktree)
            .include_ignored(false)
            .renames_head_to_index(true)
            .renames_index_to_workdir(true);

        let statuses = self
            .inner
            .statuses(Some(&mut opts))
            .context("Failed to read repository status")?;

        let mut entries = Vec::new();
        for entry in statuses.iter() {
            let Some(kind) = StatusKind::from_git2_status(entry.status(), mode) else {
                trace!("No {} change for {:?}", mode, entry.path());
                continue;
            };

            // Renames report the path on the new side
            let delta = match mode {
                Mode::Worktree => entry.index_to_workdir(),
                Mode::Staged => entry.head_to_index(),
            };
            let path = delta
                .and_then(|d| d.new_file().path().map(|p| p.to_string_lossy().into_owned()))
                .unwrap_or_else(|| String::from_utf8_lossy(entry.path_bytes()).into_owned());

            entries.push(StatusEntry { path, kind });
        }

        debug!("{} changed files in {} mode", entries.len(), mode);
        Ok(StatusList::new(entries))
    }

    /// Raw unified diff text of one file, empty when it has no change
    pub fn file_diff(&self, mode: Mode, algo: DiffAlgo, path: &str) -> Result<String> {
        let mut opts = DiffOptions::new();
        opts.pathspec(path)
            .disable_pathspec_match(true)
            .context_lines(CONTEXT_LINES);
        algo.apply(&mut opts);

        let diff = match mode {
            Mode::Worktree => {
                opts.include_untracked(true)
                    .recurse_untracked_dirs(true)
                    .show_untracked_content(true);
                self.inner.diff_index_to_workdir(None, Some(&mut opts))
            }
            Mode::Staged => {
                let head_tree = self.head_tree()?;
                self.inner
                    .diff_tree_to_index(head_tree.as_ref(), None, Some(&mut opts))
            }
        }
        .with_context(|| format!("Failed to diff {}", path))?;

        let text = diff_to_text(&diff).with_context(|| format!("Failed to print diff of {}", path))?;
        trace!("{} bytes of {} diff ({}) for {}", text.len(), mode, algo, path);
        Ok(text)
    }

    /// Tree of the HEAD commit, `None` while HEAD is unborn
    fn head_tree(&self) -> Result<Option<Tree<'_>>> {
        match self.inner.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                debug!("HEAD is unborn, diffing against an empty tree");
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to resolve HEAD"),
        }
    }
}

/// Print a libgit2 diff as unified text
fn diff_to_text(diff: &Diff<'_>) -> Result<String> {
    let mut text = String::new();
    diff.print(DiffFormat::Patch, |_, _, line| {
        if let origin @ ('+' | '-' | ' ') = line.origin() {
            text.push(origin);
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })?;
    Ok(text)
}

/// Render an error for the user, replacing "repository not found" with a hint
pub fn friendly_error(err: &anyhow::Error) -> String {
    let not_found = err.chain().any(|cause| {
        cause.downcast_ref::<git2::Error>().map_or(false, |e| {
            e.code() == ErrorCode::NotFound && e.class() == ErrorClass::Repository
        })
    });

    if not_found {
        NOT_A_REPOSITORY.to_string()
    } else {
        format!("{:#}", err)
    }
}
