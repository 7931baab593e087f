//! Navigator route declarations.
//!
//! Two declaration styles are recognized in any file:
//!
//! ```tsx
//! <Stack.Screen name="Home" component={HomeScreen} />
//!
//! createStackNavigator({ Home: HomeScreen, Profile: ProfileScreen })
//! ```
//!
//! Object-map entries are only read from the top level of the captured
//! object. Nested configuration such as `Home: { screen: HomeScreen }` is a
//! known false negative; its inner keys are never turned into routes.

use crate::graph::Route;
use regex::Regex;
use tracing::trace;

/// Extracts route declarations from navigator configuration
pub struct RouteExtractor {
    /// `<Kind.Screen name="X" component={Y}`
    declarative_pattern: Regex,
    /// `create<Word>Navigator({ ... })`, body captured
    object_map_pattern: Regex,
    /// `Key: Identifier` inside an object-map body
    entry_pattern: Regex,
}

impl RouteExtractor {
    pub fn new(navigator_kinds: &[String]) -> Result<Self, regex::Error> {
        let kinds = navigator_kinds
            .iter()
            .map(|kind| regex::escape(kind))
            .collect::<Vec<_>>()
            .join("|");

        let declarative_pattern = Regex::new(&format!(
            r#"<(?:{kinds})\.Screen\s+name=["'](.*?)["']\s+component=\{{(.*?)\}}"#
        ))?;
        let object_map_pattern = Regex::new(r"create\w*Navigator\(\s*\{([\s\S]*?)\}\)")?;
        let entry_pattern = Regex::new(r"(\w+)\s*:\s*([A-Za-z0-9_]+)\s*,?")?;

        Ok(Self {
            declarative_pattern,
            object_map_pattern,
            entry_pattern,
        })
    }

    /// Extract all routes, declarative form first, then object maps
    pub fn extract(&self, contents: &str) -> Vec<Route> {
        let mut routes = Vec::new();

        for caps in self.declarative_pattern.captures_iter(contents) {
            let route = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let component = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
            if route.is_empty() || component.is_empty() {
                continue;
            }
            trace!("Declarative route {} -> {}", route, component);
            routes.push(Route::new(route, component));
        }

        for caps in self.object_map_pattern.captures_iter(contents) {
            if let Some(body) = caps.get(1) {
                self.extract_object_entries(body.as_str(), &mut routes);
            }
        }

        routes
    }

    fn extract_object_entries(&self, body: &str, routes: &mut Vec<Route>) {
        let depths = nesting_depths(body);

        for caps in self.entry_pattern.captures_iter(body) {
            let (Some(whole), Some(route), Some(component)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            match depths.get(whole.start()) {
                Some(Some(0)) => {}
                _ => continue,
            }

            trace!("Object-map route {} -> {}", route.as_str(), component.as_str());
            routes.push(Route::new(route.as_str(), component.as_str()));
        }
    }
}

/// Bracket depth at each byte offset of `body`, or `None` once the object
/// has been closed by an unbalanced closer (e.g. a second argument that the
/// non-greedy capture swallowed).
fn nesting_depths(body: &str) -> Vec<Option<usize>> {
    let mut depths = Vec::with_capacity(body.len() + 1);
    let mut depth: Option<usize> = Some(0);

    for byte in body.bytes() {
        depths.push(depth);
        depth = match (depth, byte) {
            (Some(d), b'{' | b'[' | b'(') => Some(d + 1),
            (Some(0), b'}' | b']' | b')') => None,
            (Some(d), b'}' | b']' | b')') => Some(d - 1),
            (other, _) => other,
        };
    }
    depths.push(depth);

    depths
}
