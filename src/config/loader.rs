use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a screenmap analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Patterns to exclude from analysis; matching directories are never entered
    pub exclude: Vec<String>,

    /// Source file extensions, without the leading dot
    pub extensions: Vec<String>,

    /// Respect .gitignore / .ignore files while walking
    pub respect_gitignore: bool,

    /// Navigator discovery configuration
    pub navigation: NavigationConfig,

    /// Screen classification heuristics
    pub screens: ScreenConfig,

    /// Circuit breakers for the navigator traversal
    pub limits: LimitConfig,

    /// Report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Directory (relative to the project root) where navigator discovery starts.
    /// Falls back to the project root when it does not exist.
    pub navigation_dir: String,

    /// Navigator kinds recognized in `<Kind.Screen name=.. component={..} />`
    pub navigator_kinds: Vec<String>,

    /// Component name suffixes that mark a nested navigator
    pub navigator_suffixes: Vec<String>,

    /// Wrappers recognized in `X = wrapper(() => import("..."))`
    pub lazy_wrappers: Vec<String>,

    /// Hook calls that hand out a navigation object
    pub hooks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// File stem suffix for the naming heuristic
    pub name_suffix: String,

    /// Path fragments that mark a screen directory
    pub directories: Vec<String>,

    /// Feature root; `<feature_root>*/screens/` marks a screen directory
    pub feature_root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum nesting depth of navigator recursion
    pub max_depth: usize,

    /// Maximum number of files scanned for navigator declarations
    pub max_files: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json, dot
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude: vec![
                "**/node_modules/**".to_string(),
                "**/.expo/**".to_string(),
                "**/build/**".to_string(),
                "**/dist/**".to_string(),
                "**/Pods/**".to_string(),
            ],
            extensions: vec![
                "js".to_string(),
                "jsx".to_string(),
                "ts".to_string(),
                "tsx".to_string(),
            ],
            respect_gitignore: true,
            navigation: NavigationConfig::default(),
            screens: ScreenConfig::default(),
            limits: LimitConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            navigation_dir: "src/navigation".to_string(),
            navigator_kinds: ["Stack", "Drawer", "Tab", "MaterialTopTab", "NativeStack"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            navigator_suffixes: ["Navigator", "Stack", "Drawer", "Tab"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            lazy_wrappers: vec!["React.lazy".to_string(), "lazy".to_string()],
            hooks: vec!["useNavigation".to_string()],
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            name_suffix: "Screen".to_string(),
            directories: vec!["src/screens/".to_string()],
            feature_root: "src/features/".to_string(),
        }
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_files: 20_000,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".screenmap.yml",
            ".screenmap.yaml",
            ".screenmap.toml",
            "screenmap.yml",
            "screenmap.yaml",
            "screenmap.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Check if a path matches one of the exclusion patterns
    pub fn should_exclude(&self, path: &Path) -> bool {
        matches_any(&self.exclude, path)
    }

    /// Whether the file extension is one of the configured source extensions
    pub fn is_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|e| e == ext))
            .unwrap_or(false)
    }

    /// Whether a component name looks like a nested navigator
    pub fn looks_like_navigator(&self, component: &str) -> bool {
        self.navigation
            .navigator_suffixes
            .iter()
            .any(|suffix| component.ends_with(suffix.as_str()))
    }
}

/// Match a path against exclusion globs. Directory paths are also tried with
/// a trailing slash so `**/node_modules/**` stops the walk at the directory itself.
pub(crate) fn matches_any(patterns: &[String], path: &Path) -> bool {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let with_slash = format!("{}/", path_str);
    patterns
        .iter()
        .any(|pattern| glob_match(pattern, &path_str) || glob_match(pattern, &with_slash))
}

/// Simple glob matching for patterns like "*Navigator" or "**/node_modules/**"
fn glob_match(pattern: &str, text: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return text.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        if !pattern.contains('/') {
            return text.starts_with(prefix);
        }
    }

    if pattern.contains("**") {
        // "**/dir/**" must match a whole directory name, "/dir/" anywhere in the path
        if pattern.starts_with("**/") && pattern.ends_with("/**") {
            let dir_name = pattern
                .trim_start_matches("**/")
                .trim_end_matches("/**")
                .trim_matches('/');
            return text.contains(&format!("/{}/", dir_name));
        }

        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');

            if prefix.is_empty() && suffix.is_empty() {
                return true;
            }

            if prefix.is_empty() {
                return text.ends_with(suffix) || text.contains(&format!("/{}", suffix));
            }

            if suffix.is_empty() {
                return text.starts_with(prefix) || text.contains(&format!("{}/", prefix));
            }

            return (text.starts_with(prefix) || text.contains(&format!("/{}/", prefix)))
                && (text.ends_with(suffix) || text.contains(&format!("/{}", suffix)));
        }
    }

    text == pattern
}
