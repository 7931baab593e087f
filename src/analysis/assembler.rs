// Parallel screen scanning using rayon

use crate::error::read_source;
use crate::graph::{NavigationEdge, NavigationGraph, Screen};
use crate::parser::{EdgeScan, NavigationSyntax};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Turns classified screen files into screens and navigation edges
pub struct GraphAssembler<'a> {
    syntax: &'a dyn NavigationSyntax,
}

impl<'a> GraphAssembler<'a> {
    pub fn new(syntax: &'a dyn NavigationSyntax) -> Self {
        Self { syntax }
    }

    /// Scan every screen file independently and join the results.
    /// Screens keep the order of `screen_files`; edges are deduplicated
    /// within each file.
    pub fn assemble(&self, screen_files: &[PathBuf]) -> NavigationGraph {
        info!("Extracting navigation from {} screen(s)...", screen_files.len());

        let scanned: Vec<(Screen, Vec<NavigationEdge>)> = screen_files
            .par_iter()
            .map(|path| self.scan_screen(path))
            .collect();

        // Edges are distinct per file only; two screens sharing a stem keep
        // their own copies and the store drops exact duplicates
        let mut graph = NavigationGraph::default();
        for (screen, edges) in scanned {
            graph.screens.push(screen);
            graph.edges.extend(edges);
        }

        info!(
            "Assembled {} screens and {} navigation paths",
            graph.screen_count(),
            graph.edge_count()
        );
        graph
    }

    fn scan_screen(&self, path: &Path) -> (Screen, Vec<NavigationEdge>) {
        let scan = match read_source(path) {
            Ok(contents) => self.syntax.extract_edges(&contents),
            Err(err) => {
                warn!("Screen kept without navigation data: {}", err);
                EdgeScan::default()
            }
        };

        let screen = Screen::new(path.to_path_buf(), scan.dependencies());
        let edges: Vec<NavigationEdge> = scan
            .transitions
            .into_iter()
            .map(|(action, target)| NavigationEdge::new(screen.name.clone(), target, action))
            .collect();

        debug!("{}: {} outgoing edge(s)", screen.name, edges.len());
        (screen, edges)
    }
}
