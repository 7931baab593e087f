use super::summary::unmatched_targets;
use crate::analysis::NavigationAnalysis;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

/// Graphviz DOT reporter
pub struct DotReporter {
    output_path: Option<PathBuf>,
}

impl DotReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, analysis: &NavigationAnalysis) -> Result<()> {
        let dot = Self::render(analysis);

        if let Some(path) = &self.output_path {
            std::fs::write(path, &dot).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            print!("{}", dot);
        }

        Ok(())
    }

    /// Screens become boxes, edges are labelled with their action. Targets
    /// that match no screen get a dashed node of their own.
    pub fn render(analysis: &NavigationAnalysis) -> String {
        let graph = &analysis.graph;
        let mut dot = String::from("digraph navigation {\n");
        dot.push_str("    rankdir=LR;\n");
        dot.push_str("    node [shape=box];\n");

        for screen in &graph.screens {
            dot.push_str(&format!("    {};\n", quote(&screen.name)));
        }

        for target in unmatched_targets(graph) {
            dot.push_str(&format!("    {} [style=dashed];\n", quote(target)));
        }

        for edge in &graph.edges {
            dot.push_str(&format!(
                "    {} -> {} [label={}];\n",
                quote(&edge.source),
                quote(&edge.target),
                quote(edge.action.as_str())
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
