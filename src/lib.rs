//! screenmap - Screen and navigation graph extraction for React Native projects
//!
//! This library reconstructs which screens an app has and which navigation
//! calls connect them, by static pattern matching over JS/TS sources.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - Walk the source tree in a deterministic order
//! 2. **Navigator Discovery** - Extract route declarations, recursing into nested navigators
//! 3. **Component Resolution** - Locate the files defining routed components
//! 4. **Screen Classification** - Union routed components with path heuristics
//! 5. **Edge Extraction** - Collect navigation calls from every screen
//! 6. **Reporting** - Terminal, JSON or DOT output, plus an optional store

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod parser;
pub mod report;
pub mod store;

pub use analysis::{analyze_project, NavigationAnalysis, NavigationAnalyzer};
pub use config::Config;
pub use discovery::FileFinder;
pub use error::ScanError;
pub use graph::{NavigationAction, NavigationEdge, NavigationGraph, RouteComponentMap, Screen};
pub use parser::{JsNavigationParser, NavigationSyntax};
pub use report::{ReportFormat, Reporter};
pub use store::{MemoryStore, ScreenStore, StoreError};
