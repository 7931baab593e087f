mod assembler;
mod classifier;

pub use assembler::GraphAssembler;
pub use classifier::ScreenClassifier;

use crate::config::Config;
use crate::graph::{ComponentResolver, NavigationGraph, NavigatorGraphBuilder, RouteComponentMap};
use crate::parser::{JsNavigationParser, NavigationSyntax};
use miette::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Everything one analysis run produced
#[derive(Debug, Clone)]
pub struct NavigationAnalysis {
    /// Screens and navigation edges
    pub graph: NavigationGraph,

    /// Final route to component map
    pub routes: RouteComponentMap,

    /// Files scanned for navigator declarations, in scan order
    pub scanned_navigators: Vec<PathBuf>,

    /// A traversal limit cut navigator discovery short
    pub truncated: bool,

    /// Component definition scans performed (cache misses)
    pub resolver_scans: usize,
}

/// Runs navigator discovery, screen classification and edge extraction
/// over one project tree.
///
/// Each call to [`NavigationAnalyzer::analyze`] owns its own traversal
/// state, so analyzers for different projects never share anything.
pub struct NavigationAnalyzer<'a> {
    config: &'a Config,
    syntax: Box<dyn NavigationSyntax + 'a>,
}

impl<'a> NavigationAnalyzer<'a> {
    /// Analyzer backed by the pattern-based JS/TS parser
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            syntax: Box::new(JsNavigationParser::new(config)?),
        })
    }

    /// Analyzer backed by a custom syntax implementation
    pub fn with_syntax(config: &'a Config, syntax: Box<dyn NavigationSyntax + 'a>) -> Self {
        Self { config, syntax }
    }

    /// Analyze a project. Never fails: unreadable files and unresolved
    /// components only shrink the result.
    pub fn analyze(&self, root: &Path) -> NavigationAnalysis {
        let root = match root.canonicalize() {
            Ok(root) => root,
            Err(err) => {
                warn!("Cannot canonicalize {}: {}", root.display(), err);
                root.to_path_buf()
            }
        };

        info!("Analyzing navigation in {}", root.display());

        let syntax = self.syntax.as_ref();
        let mut resolver = ComponentResolver::new(self.config, syntax, &root);

        let context = NavigatorGraphBuilder::new(self.config, syntax).build(&root, &mut resolver);

        info!("Classifying screens...");
        let screen_files =
            ScreenClassifier::new(self.config).classify(&root, &context.routes, &mut resolver);

        let graph = GraphAssembler::new(syntax).assemble(&screen_files);

        NavigationAnalysis {
            graph,
            routes: context.routes,
            scanned_navigators: context.scan_order,
            truncated: context.truncated,
            resolver_scans: resolver.scan_count(),
        }
    }
}

/// Analyze `root` with the default parser
pub fn analyze_project(root: &Path, config: &Config) -> Result<NavigationAnalysis> {
    Ok(NavigationAnalyzer::new(config)?.analyze(root))
}
