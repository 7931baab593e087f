use crate::graph::{DefinitionKind, NavigationAction, Route};
use std::collections::BTreeSet;

/// How a file relates to a component name it was probed for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionMatch {
    /// The file itself defines the component
    Defined(DefinitionKind),

    /// The file assigns the component from a deferred `import("...")`;
    /// the specifier still has to be resolved against the file's directory
    Lazy { specifier: String },
}

/// Result of scanning a screen file for outgoing transitions
#[derive(Debug, Default, Clone)]
pub struct EdgeScan {
    /// Distinct `(action, target)` pairs found at call sites
    pub transitions: BTreeSet<(NavigationAction, String)>,

    /// Raw import statement lines, in file order
    pub imports: Vec<String>,
}

impl EdgeScan {
    /// Import lines joined the way screens store them
    pub fn dependencies(&self) -> String {
        self.imports.join(", ")
    }
}

/// Syntax capabilities the navigation graph is built from.
///
/// The graph builder, resolver and assembler only talk to this trait, so a
/// syntax-tree backed implementation can replace the regex one without
/// touching the traversal.
pub trait NavigationSyntax: Send + Sync {
    /// Extract `(route, component)` declarations from a file
    fn extract_routes(&self, contents: &str) -> Vec<Route>;

    /// Check whether a file defines, or lazily imports, `component`
    fn find_definition(&self, contents: &str, component: &str) -> Option<DefinitionMatch>;

    /// Extract outgoing transitions and import lines from a screen file
    fn extract_edges(&self, contents: &str) -> EdgeScan;
}
