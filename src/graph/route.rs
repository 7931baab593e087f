use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named route declared by a navigator, pointing at a bare component
/// identifier that has not been resolved to a file yet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub route_name: String,
    pub component_name: String,
}

impl Route {
    pub fn new(route_name: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            component_name: component_name.into(),
        }
    }
}

/// Route name to component name, accumulated over a whole traversal.
/// Later declarations of the same route overwrite earlier ones.
pub type RouteComponentMap = HashMap<String, String>;
