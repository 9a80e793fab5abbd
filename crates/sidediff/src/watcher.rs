//! Simple file system watcher for repository changes
//!
//! Watches the repository directory and reports which diff mode needs a refresh.

use git::Mode;
use log::{debug, info, trace, warn};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

/// Quiet period that ends a burst of events
const DEBOUNCE: Duration = Duration::from_millis(200);

/// Which part of the repository changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchScope {
    /// Files in the working directory
    Worktree,
    /// The git index
    Staged,
    /// Anything else under .git (refs, HEAD, config)
    All,
}

impl WatchScope {
    /// Whether a change in this scope can alter the diff shown for `mode`
    pub fn affects(self, mode: Mode) -> bool {
        match self {
            WatchScope::Worktree => mode == Mode::Worktree,
            WatchScope::Staged | WatchScope::All => true,
        }
    }

    /// Merge two scopes, preferring All if they differ
    fn merge(current: Option<WatchScope>, new: WatchScope) -> WatchScope {
        match current {
            None => new,
            Some(current) if current == new => current,
            Some(_) => WatchScope::All,
        }
    }
}

/// A watcher over a repository's working directory and .git directory
pub struct RepoWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<Result<Event, notify::Error>>,
    root: PathBuf,
}

impl RepoWatcher {
    /// Create a new watcher for the given repository working directory
    pub fn new(repo_path: &Path) -> anyhow::Result<Self> {
        info!("Creating RepoWatcher for: {:?}", repo_path);
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(500)),
        )?;

        // The working directory watch covers .git as well
        if !repo_path.join(".git").exists() {
            warn!("No .git directory found under: {:?}", repo_path);
        }
        watcher.watch(repo_path, RecursiveMode::Recursive)?;

        info!("RepoWatcher initialized successfully");
        Ok(Self {
            _watcher: watcher,
            rx,
            root: repo_path.to_path_buf(),
        })
    }

    /// Block until a relevant change arrives, then drain the burst that follows it.
    ///
    /// Returns `None` once the watcher has shut down.
    pub fn wait_for_change(&self) -> Option<WatchScope> {
        let mut result = None;

        while result.is_none() {
            match self.rx.recv() {
                Ok(event) => result = self.merge_event(result, event),
                Err(_) => return None,
            }
        }

        loop {
            match self.rx.recv_timeout(DEBOUNCE) {
                Ok(event) => result = self.merge_event(result, event),
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
            }
        }

        if let Some(ref scope) = result {
            info!("wait_for_change returning: {:?}", scope);
        }
        result
    }

    fn merge_event(
        &self,
        current: Option<WatchScope>,
        event: Result<Event, notify::Error>,
    ) -> Option<WatchScope> {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                warn!("File watcher error: {:?}", e);
                return current;
            }
        };

        // Filter out Access events - we only care about actual changes
        if matches!(event.kind, EventKind::Access(_)) {
            trace!("Ignoring access event: {:?}", event);
            return current;
        }

        let mut result = current;
        for path in &event.paths {
            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            match classify_path(relative) {
                Some(scope) => {
                    debug!("File event {:?}: {} -> {:?}", event.kind, path.display(), scope);
                    result = Some(WatchScope::merge(result, scope));
                }
                None => trace!("Ignoring event for {}", path.display()),
            }
        }
        result
    }
}

/// Classify a path relative to the working directory; `None` means irrelevant
fn classify_path(path: &Path) -> Option<WatchScope> {
    let git_dir = Path::new(".git");
    if !path.starts_with(git_dir) {
        return Some(WatchScope::Worktree);
    }

    // Object writes and lock files always come with a ref or index update
    if path.starts_with(git_dir.join("objects"))
        || path.extension().map_or(false, |ext| ext == "lock")
    {
        return None;
    }

    if path == git_dir.join("index") {
        return Some(WatchScope::Staged);
    }

    Some(WatchScope::All)
}
