use super::summary::{matching_screens, unmatched_targets, NavigationSummary};
use crate::analysis::NavigationAnalysis;
use colored::Colorize;
use miette::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Terminal reporter with colored output
pub struct TerminalReporter {
    project_root: Option<PathBuf>,
}

impl TerminalReporter {
    pub fn new(project_root: Option<PathBuf>) -> Self {
        Self { project_root }
    }

    pub fn report(&self, analysis: &NavigationAnalysis) -> Result<()> {
        let graph = &analysis.graph;

        if graph.screens.is_empty() {
            println!("{}", "No screens found.".yellow().bold());
            self.print_truncation(analysis);
            return Ok(());
        }

        println!();
        println!(
            "{}",
            format!(
                "Found {} screens and {} navigation paths:",
                graph.screen_count(),
                graph.edge_count()
            )
            .green()
            .bold()
        );
        println!();

        for screen in &graph.screens {
            println!(
                "{} {}",
                screen.name.cyan().bold(),
                self.display_path(&screen.file_path).dimmed()
            );

            for edge in graph.edges_from(&screen.name) {
                let resolved = matching_screens(graph, &edge.target);
                let target = if resolved.is_empty() {
                    edge.target.yellow().to_string()
                } else {
                    edge.target.white().to_string()
                };
                println!("    {} {} {}", "→".dimmed(), edge.action.as_str().dimmed(), target);
            }
        }

        println!();
        self.print_routes(analysis);
        self.print_summary(analysis);
        self.print_truncation(analysis);

        Ok(())
    }

    fn print_routes(&self, analysis: &NavigationAnalysis) {
        if analysis.routes.is_empty() {
            return;
        }

        let routes: BTreeMap<_, _> = analysis.routes.iter().collect();
        println!("{}", "Declared routes:".dimmed());
        for (route, component) in routes {
            println!("  {} {} {}", route, "⇒".dimmed(), component);
        }
        println!();
    }

    fn print_summary(&self, analysis: &NavigationAnalysis) {
        let graph = &analysis.graph;
        let summary = NavigationSummary::from_graph(graph);

        println!("{}", "─".repeat(60).dimmed());
        println!("{:<40} {:>8} {:>8}  {}", "Name", "In", "Out", "Notes");
        for entry in &summary.entries {
            println!(
                "{:<40} {:>8} {:>8}  {}",
                entry.name,
                entry.incoming,
                entry.outgoing,
                entry.notes().join(", ").dimmed()
            );
        }
        println!();

        let unmatched = unmatched_targets(graph);
        if !unmatched.is_empty() {
            println!(
                "{}",
                format!(
                    "⚠ {} route target(s) match no screen name: {}",
                    unmatched.len(),
                    unmatched.join(", ")
                )
                .yellow()
            );
        }
        println!(
            "{}",
            format!(
                "Scanned {} navigator file(s), {} definition lookup(s)",
                analysis.scanned_navigators.len(),
                analysis.resolver_scans
            )
            .dimmed()
        );
    }

    fn print_truncation(&self, analysis: &NavigationAnalysis) {
        if analysis.truncated {
            println!(
                "{}",
                "⚠ Navigator discovery hit a traversal limit; the graph may be incomplete".yellow()
            );
        }
    }

    fn display_path(&self, path: &Path) -> String {
        self.project_root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new(None)
    }
}
