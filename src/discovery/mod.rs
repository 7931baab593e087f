mod file_finder;

pub use file_finder::{normalize_path, FileFinder};
