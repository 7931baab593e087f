use super::{ComponentResolver, RouteComponentMap};
use crate::config::Config;
use crate::discovery::FileFinder;
use crate::error::{read_source, ScanError};
use crate::parser::NavigationSyntax;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// State owned by one navigator traversal.
///
/// Passed by `&mut` through the recursion; the visited set is checked and
/// updated by the single owner, so a file is scanned at most once.
#[derive(Debug, Default)]
pub struct TraversalContext {
    /// Route name to component name, last write wins
    pub routes: RouteComponentMap,

    /// Files already scanned for navigator declarations
    pub visited: HashSet<PathBuf>,

    /// Visited files in scan order
    pub scan_order: Vec<PathBuf>,

    /// A depth or file-count limit cut the traversal short
    pub truncated: bool,
}

impl TraversalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a file visited; false if it already was
    fn mark_visited(&mut self, path: &Path) -> bool {
        if !self.visited.insert(path.to_path_buf()) {
            return false;
        }
        self.scan_order.push(path.to_path_buf());
        true
    }

    fn trip(&mut self, err: ScanError) {
        if !self.truncated {
            warn!("{}", err);
        }
        self.truncated = true;
    }
}

/// Builds the route map by walking navigator files and recursing into
/// nested navigators wherever they are defined
pub struct NavigatorGraphBuilder<'a> {
    config: &'a Config,
    syntax: &'a dyn NavigationSyntax,
    finder: FileFinder<'a>,
}

impl<'a> NavigatorGraphBuilder<'a> {
    pub fn new(config: &'a Config, syntax: &'a dyn NavigationSyntax) -> Self {
        Self {
            config,
            syntax,
            finder: FileFinder::new(config),
        }
    }

    /// Walk `<root>/<navigation_dir>` (or `root` if it is missing) and every
    /// nested navigator reachable from it
    pub fn build(&self, root: &Path, resolver: &mut ComponentResolver<'_>) -> TraversalContext {
        let navigation_dir = root.join(&self.config.navigation.navigation_dir);
        let base = if navigation_dir.is_dir() {
            navigation_dir
        } else {
            root.to_path_buf()
        };

        info!("Discovering navigators from {}", base.display());

        let mut context = TraversalContext::new();
        self.walk(&base, 0, &mut context, resolver);

        info!(
            "Scanned {} navigator candidates, found {} routes",
            context.scan_order.len(),
            context.routes.len()
        );
        context
    }

    fn walk(
        &self,
        path: &Path,
        depth: usize,
        context: &mut TraversalContext,
        resolver: &mut ComponentResolver<'_>,
    ) {
        let limits = &self.config.limits;
        if depth > limits.max_depth {
            context.trip(ScanError::DepthLimit {
                limit: limits.max_depth,
                path: path.to_path_buf(),
            });
            return;
        }

        for file in self.finder.walk(path) {
            if context.visited.contains(&file) {
                continue;
            }
            if context.visited.len() >= limits.max_files {
                context.trip(ScanError::FileLimit {
                    limit: limits.max_files,
                });
                return;
            }
            context.mark_visited(&file);

            let contents = match read_source(&file) {
                Ok(contents) => contents,
                Err(err) => {
                    warn!("Skipping navigator candidate: {}", err);
                    continue;
                }
            };

            let routes = self.syntax.extract_routes(&contents);
            if !routes.is_empty() {
                debug!("{}: {} route(s)", file.display(), routes.len());
            }

            for route in routes {
                let nested = self.config.looks_like_navigator(&route.component_name);
                let component = route.component_name.clone();
                context.routes.insert(route.route_name, route.component_name);

                if nested {
                    for defining_file in resolver.find_defining_files(&component) {
                        self.walk(&defining_file, depth + 1, context, resolver);
                    }
                }
            }
        }
    }
}
