use crate::config::Config;
use crate::discovery::FileFinder;
use crate::graph::{screen_name, ComponentResolver, RouteComponentMap};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Decides which source files are screens.
///
/// A file qualifies when any of these hold:
/// - it defines a component that some route maps to
/// - a path segment is `screens` (any case) and the stem ends with `Screen`
/// - its path contains `src/screens/` or `src/features/*/screens/` (any case)
pub struct ScreenClassifier<'a> {
    config: &'a Config,
    finder: FileFinder<'a>,
}

impl<'a> ScreenClassifier<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            finder: FileFinder::new(config),
        }
    }

    /// Screen files under `root`, in walk order, without duplicates
    pub fn classify(
        &self,
        root: &Path,
        routes: &RouteComponentMap,
        resolver: &mut ComponentResolver<'_>,
    ) -> Vec<PathBuf> {
        let mut components: Vec<&String> = routes.values().collect();
        components.sort();
        components.dedup();

        let mut routed_files = HashSet::new();
        for component in components {
            routed_files.extend(resolver.find_defining_files(component));
        }
        debug!("{} file(s) define routed components", routed_files.len());

        let mut seen = HashSet::new();
        self.finder
            .walk(root)
            .filter(|path| {
                // The naming rule only looks below the root; the directory
                // rule sees the full path so a walk rooted at `src/` still
                // recognizes `src/screens/`
                let relative = path.strip_prefix(root).unwrap_or(path);
                let is_screen = routed_files.contains(path)
                    || self.matches_naming_convention(relative)
                    || self.in_screen_directory(path);
                if is_screen {
                    trace!("Screen: {}", path.display());
                }
                is_screen
            })
            .filter(|path| seen.insert(path.clone()))
            .collect()
    }

    /// `.../screens/.../FooScreen.tsx`
    pub fn matches_naming_convention(&self, path: &Path) -> bool {
        let in_screens_segment = path.parent().is_some_and(|parent| {
            parent
                .components()
                .any(|c| c.as_os_str().to_string_lossy().eq_ignore_ascii_case("screens"))
        });

        in_screens_segment && screen_name(path).ends_with(self.config.screens.name_suffix.as_str())
    }

    /// `src/screens/...` or `src/features/<feature>/screens/...`
    pub fn in_screen_directory(&self, path: &Path) -> bool {
        let lowered = path.to_string_lossy().replace('\\', "/").to_lowercase();
        let screens = &self.config.screens;

        if screens
            .directories
            .iter()
            .any(|dir| lowered.contains(&dir.to_lowercase()))
        {
            return true;
        }

        let feature_root = screens.feature_root.to_lowercase();
        match lowered.find(&feature_root) {
            Some(start) => lowered[start + feature_root.len()..].contains("/screens/"),
            None => false,
        }
    }
}
