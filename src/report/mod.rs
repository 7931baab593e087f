mod dot;
mod json;
mod summary;
mod terminal;

pub use dot::DotReporter;
pub use json::JsonReporter;
pub use summary::{matching_screens, unmatched_targets, NavigationSummary, ScreenSummary};
pub use terminal::TerminalReporter;

use crate::analysis::NavigationAnalysis;
use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
    Dot,
}

/// Reporter for presenting a navigation analysis
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    project_root: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
            project_root: None,
        }
    }

    /// Show screen paths relative to this root in terminal output
    pub fn with_project_root(mut self, root: PathBuf) -> Self {
        self.project_root = Some(root);
        self
    }

    pub fn report(&self, analysis: &NavigationAnalysis) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new(self.project_root.clone());
                reporter.report(analysis)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone());
                reporter.report(analysis)
            }
            ReportFormat::Dot => {
                let reporter = DotReporter::new(self.output_path.clone());
                reporter.report(analysis)
            }
        }
    }
}
