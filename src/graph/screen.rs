use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A source file classified as one navigable screen
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Screen {
    /// File basename without extension
    pub name: String,

    /// Always "screen"
    #[serde(rename = "type")]
    pub screen_type: String,

    pub file_path: PathBuf,

    /// Import lines of the file, joined with ", "
    pub dependencies: String,
}

impl Screen {
    pub fn new(file_path: PathBuf, dependencies: String) -> Self {
        Self {
            name: screen_name(&file_path),
            screen_type: "screen".to_string(),
            file_path,
            dependencies,
        }
    }
}

/// Identity shared by screens and edge sources: the file stem
pub fn screen_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
