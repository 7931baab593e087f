use crate::config::{matches_any, Config};
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace, warn};

/// File finder for discovering JS/TS source files in a project
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Lazily walk `root` and yield every source file beneath it.
    ///
    /// Entries are yielded in file-name order so repeated walks see the same
    /// sequence. `root` may itself be a file, in which case it is the only
    /// candidate. Unreadable directories are logged and skipped.
    pub fn walk(&self, root: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        debug!("Walking source tree: {}", root.display());

        let config = self.config;
        let exclude = config.exclude.clone();
        let walk_root = root.to_path_buf();
        let respect_ignore = config.respect_gitignore;

        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(respect_ignore)
            .git_global(respect_ignore)
            .git_exclude(respect_ignore)
            .ignore(respect_ignore)
            .parents(respect_ignore)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                // Match relative to the walk root so a project living under
                // e.g. `/home/me/build/app` is not excluded wholesale
                let relative = entry.path().strip_prefix(&walk_root).unwrap_or(entry.path());
                let anchored = Path::new("/").join(relative);
                let excluded = matches_any(&exclude, &anchored);
                if excluded {
                    trace!("Excluding: {}", entry.path().display());
                }
                !excluded
            })
            .build();

        walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.into_path())
            .filter(move |path| config.is_source_extension(path))
    }

    /// Collect every source file under `root`
    pub fn find_files(&self, root: &Path) -> Vec<PathBuf> {
        let files: Vec<PathBuf> = self.walk(root).collect();
        debug!("Found {} source files under {}", files.len(), root.display());
        files
    }
}

/// Lexically normalize a path, folding `.` and `..` components without
/// touching the filesystem
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
