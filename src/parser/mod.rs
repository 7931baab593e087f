mod common;
mod definitions;
mod edges;
mod javascript;
mod routes;

pub use common::{DefinitionMatch, EdgeScan, NavigationSyntax};
pub use definitions::DefinitionMatcher;
pub use edges::EdgeExtractor;
pub use javascript::JsNavigationParser;
pub use routes::RouteExtractor;
