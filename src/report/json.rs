use super::summary::{matching_screens, NavigationSummary};
use crate::analysis::NavigationAnalysis;
use crate::graph::{NavigationEdge, Screen};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, analysis: &NavigationAnalysis) -> Result<()> {
        let json = Self::render(analysis)?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }

    pub fn render(analysis: &NavigationAnalysis) -> Result<String> {
        let report = JsonReport::from_analysis(analysis);
        serde_json::to_string_pretty(&report).into_diagnostic()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    total_screens: usize,
    total_navigation_paths: usize,
    truncated: bool,
    screens: &'a [Screen],
    navigation_paths: Vec<JsonPath<'a>>,
    routes: BTreeMap<&'a str, &'a str>,
    summary: NavigationSummary,
}

#[derive(Serialize)]
struct JsonPath<'a> {
    #[serde(flatten)]
    edge: &'a NavigationEdge,
    /// Screens the target loosely matches
    target_screens: Vec<&'a str>,
}

impl<'a> JsonReport<'a> {
    fn from_analysis(analysis: &'a NavigationAnalysis) -> Self {
        let graph = &analysis.graph;

        let navigation_paths = graph
            .edges
            .iter()
            .map(|edge| JsonPath {
                edge,
                target_screens: matching_screens(graph, &edge.target)
                    .into_iter()
                    .map(|screen| screen.name.as_str())
                    .collect(),
            })
            .collect();

        Self {
            version: "1.0",
            total_screens: graph.screen_count(),
            total_navigation_paths: graph.edge_count(),
            truncated: analysis.truncated,
            screens: &graph.screens,
            navigation_paths,
            routes: analysis
                .routes
                .iter()
                .map(|(route, component)| (route.as_str(), component.as_str()))
                .collect(),
            summary: NavigationSummary::from_graph(graph),
        }
    }
}
