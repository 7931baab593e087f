use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a component came to be defined in a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefinitionKind {
    /// `export function X(` or a plain `function X(`
    DirectExport,
    /// `export default function X(` or `export default X`
    DefaultExport,
    /// `X = lazy(() => import("./path"))`, resolved to the imported file
    LazyImport,
}

impl DefinitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionKind::DirectExport => "direct export",
            DefinitionKind::DefaultExport => "default export",
            DefinitionKind::LazyImport => "lazy import",
        }
    }
}

/// A file known to define a component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentDefinition {
    pub component_name: String,
    pub file_path: PathBuf,
    pub kind: DefinitionKind,
}
