mod builder;
mod definition;
mod edge;
mod resolver;
mod route;
mod screen;

pub use builder::{NavigatorGraphBuilder, TraversalContext};
pub use definition::{ComponentDefinition, DefinitionKind};
pub use edge::{NavigationAction, NavigationEdge};
pub use resolver::{resolve_lazy_import, ComponentResolver};
pub use route::{Route, RouteComponentMap};
pub use screen::{screen_name, Screen};

use serde::{Deserialize, Serialize};

/// The two collections handed to persistence and presentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGraph {
    pub screens: Vec<Screen>,
    pub edges: Vec<NavigationEdge>,
}

impl NavigationGraph {
    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing edges of a screen, by name
    pub fn edges_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a NavigationEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.source == source)
    }

    pub fn find_screen(&self, name: &str) -> Option<&Screen> {
        self.screens.iter().find(|screen| screen.name == name)
    }
}
