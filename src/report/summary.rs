use crate::graph::{NavigationGraph, Screen};
use serde::Serialize;
use std::collections::BTreeMap;

/// Incoming/outgoing edge counts for one name seen in the edge set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenSummary {
    pub name: String,
    pub incoming: usize,
    pub outgoing: usize,
    /// Nothing navigates here
    pub entry_point: bool,
    /// Navigates nowhere
    pub dead_end: bool,
}

impl ScreenSummary {
    fn new(name: &str, incoming: usize, outgoing: usize) -> Self {
        Self {
            name: name.to_string(),
            incoming,
            outgoing,
            entry_point: incoming == 0,
            dead_end: outgoing == 0,
        }
    }

    /// Human-readable tags, e.g. `["Entry Point"]`
    pub fn notes(&self) -> Vec<&'static str> {
        let mut notes = Vec::new();
        if self.entry_point {
            notes.push("Entry Point");
        }
        if self.dead_end {
            notes.push("Dead End");
        }
        notes
    }
}

/// Per-name edge counts, keyed by the exact strings used in edges
#[derive(Debug, Clone, Default, Serialize)]
pub struct NavigationSummary {
    pub entries: Vec<ScreenSummary>,
}

impl NavigationSummary {
    /// Count edges per source and target name. Rows are ordered by incoming
    /// count ascending, then outgoing count descending, then name.
    pub fn from_graph(graph: &NavigationGraph) -> Self {
        let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for edge in &graph.edges {
            counts.entry(edge.target.as_str()).or_default().0 += 1;
            counts.entry(edge.source.as_str()).or_default().1 += 1;
        }

        let mut entries: Vec<ScreenSummary> = counts
            .into_iter()
            .map(|(name, (incoming, outgoing))| ScreenSummary::new(name, incoming, outgoing))
            .collect();
        // Stable sort keeps name order within equal counts
        entries.sort_by(|a, b| {
            a.incoming
                .cmp(&b.incoming)
                .then_with(|| b.outgoing.cmp(&a.outgoing))
        });

        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ScreenSummary> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

/// Screens a route target plausibly refers to.
///
/// Targets are raw route strings, so this is containment in either
/// direction (`"Profile"` matches `ProfileScreen`), not an exact key.
pub fn matching_screens<'a>(graph: &'a NavigationGraph, target: &str) -> Vec<&'a Screen> {
    graph
        .screens
        .iter()
        .filter(|screen| {
            !screen.name.is_empty() && (screen.name.contains(target) || target.contains(&screen.name))
        })
        .collect()
}

/// Distinct edge targets with no plausible screen, sorted
pub fn unmatched_targets(graph: &NavigationGraph) -> Vec<&str> {
    let mut targets: Vec<&str> = graph
        .edges
        .iter()
        .map(|edge| edge.target.as_str())
        .filter(|target| matching_screens(graph, target).is_empty())
        .collect();
    targets.sort_unstable();
    targets.dedup();
    targets
}
