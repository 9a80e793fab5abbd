use derive_more::Display;
use git2::Status as Git2Status;

use crate::mode::Mode;

/// Represents the status kind of a changed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StatusKind {
    /// The file has been modified (also used for type changes and conflicts)
    #[display(fmt = "Modified")]
    Modified,
    /// The file is new in the index
    #[display(fmt = "Added")]
    Added,
    /// The file has been deleted
    #[display(fmt = "Deleted")]
    Deleted,
    /// The file has been renamed
    #[display(fmt = "Renamed")]
    Renamed,
    /// The file is untracked in the working directory
    #[display(fmt = "Untracked")]
    Untracked,
}

impl StatusKind {
    /// One-letter code shown next to a path
    pub fn code(self) -> char {
        match self {
            StatusKind::Modified => 'M',
            StatusKind::Added => 'A',
            StatusKind::Deleted => 'D',
            StatusKind::Renamed => 'R',
            StatusKind::Untracked => '?',
        }
    }

    /// Classify a libgit2 status for the given mode.
    ///
    /// Returns `None` when the path has no change visible in that mode.
    pub fn from_git2_status(status: Git2Status, mode: Mode) -> Option<Self> {
        if status.is_conflicted() {
            return Some(StatusKind::Modified);
        }
        match mode {
            Mode::Worktree => Self::from_worktree(status).or_else(|| Self::from_index(status)),
            Mode::Staged => Self::from_index(status),
        }
    }

    fn from_worktree(status: Git2Status) -> Option<Self> {
        if status.is_wt_new() {
            return Some(StatusKind::Untracked);
        }
        if status.is_wt_modified() || status.is_wt_typechange() {
            return Some(StatusKind::Modified);
        }
        if status.is_wt_deleted() {
            return Some(StatusKind::Deleted);
        }
        if status.is_wt_renamed() {
            return Some(StatusKind::Renamed);
        }
        None
    }

    fn from_index(status: Git2Status) -> Option<Self> {
        if status.is_index_new() {
            return Some(StatusKind::Added);
        }
        if status.is_index_modified() || status.is_index_typechange() {
            return Some(StatusKind::Modified);
        }
        if status.is_index_deleted() {
            return Some(StatusKind::Deleted);
        }
        if status.is_index_renamed() {
            return Some(StatusKind::Renamed);
        }
        None
    }
}

/// Entry in a status list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Path to the file, relative to the repository root
    pub path: String,
    /// The status kind of the file
    pub kind: StatusKind,
}

/// Changed files of a repository, sorted by path
#[derive(Debug, Clone, Default)]
pub struct StatusList {
    /// The list of status entries
    pub entries: Vec<StatusEntry>,
}

impl StatusList {
    pub(crate) fn new(mut entries: Vec<StatusEntry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries.dedup_by(|a, b| a.path == b.path);
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Paths in display order
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }

    /// Get a filtered list of entries that match the given predicate
    pub fn filter<F>(&self, predicate: F) -> Vec<&StatusEntry>
    where
        F: Fn(&StatusEntry) -> bool,
    {
        self.entries.iter().filter(|e| predicate(e)).collect()
    }

    /// Get the status entry for a specific file path
    pub fn get_file_status(&self, path: &str) -> Option<&StatusEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn added(&self) -> Vec<&StatusEntry> {
        self.filter(|e| e.kind == StatusKind::Added)
    }

    pub fn modified(&self) -> Vec<&StatusEntry> {
        self.filter(|e| e.kind == StatusKind::Modified)
    }

    pub fn deleted(&self) -> Vec<&StatusEntry> {
        self.filter(|e| e.kind == StatusKind::Deleted)
    }

    pub fn renamed(&self) -> Vec<&StatusEntry> {
        self.filter(|e| e.kind == StatusKind::Renamed)
    }

    pub fn untracked(&self) -> Vec<&StatusEntry> {
        self.filter(|e| e.kind == StatusKind::Untracked)
    }
}
