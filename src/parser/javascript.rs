use super::{DefinitionMatch, DefinitionMatcher, EdgeExtractor, EdgeScan, NavigationSyntax, RouteExtractor};
use crate::config::Config;
use crate::graph::Route;
use miette::{IntoDiagnostic, Result, WrapErr};

/// Pattern-based JS/TS/TSX navigation parser.
///
/// This is best-effort syntactic recognition, not a parse: it tolerates
/// false negatives and positives in exchange for one regex pass per file.
pub struct JsNavigationParser {
    routes: RouteExtractor,
    definitions: DefinitionMatcher,
    edges: EdgeExtractor,
}

impl JsNavigationParser {
    pub fn new(config: &Config) -> Result<Self> {
        let navigation = &config.navigation;

        Ok(Self {
            routes: RouteExtractor::new(&navigation.navigator_kinds)
                .into_diagnostic()
                .wrap_err("Invalid navigator kind")?,
            definitions: DefinitionMatcher::new(&navigation.lazy_wrappers)
                .into_diagnostic()
                .wrap_err("Invalid lazy wrapper")?,
            edges: EdgeExtractor::new(&navigation.hooks)
                .into_diagnostic()
                .wrap_err("Invalid navigation hook")?,
        })
    }
}

impl NavigationSyntax for JsNavigationParser {
    fn extract_routes(&self, contents: &str) -> Vec<Route> {
        self.routes.extract(contents)
    }

    fn find_definition(&self, contents: &str, component: &str) -> Option<DefinitionMatch> {
        self.definitions.find(contents, component)
    }

    fn extract_edges(&self, contents: &str) -> EdgeScan {
        self.edges.extract(contents)
    }
}
