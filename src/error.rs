use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning a source tree.
///
/// None of these abort an analysis: the graph builder, classifier and
/// assembler log them and carry on with the remaining files.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Navigator nesting exceeds {limit} levels at {}", path.display())]
    DepthLimit { limit: usize, path: PathBuf },
    #[error("Visited file limit of {limit} reached")]
    FileLimit { limit: usize },
}

/// Read a source file, attaching the path to any I/O error
pub fn read_source(path: &std::path::Path) -> Result<String, ScanError> {
    std::fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })
}
