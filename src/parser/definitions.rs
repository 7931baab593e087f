use super::DefinitionMatch;
use crate::graph::DefinitionKind;
use regex::Regex;

/// Recognizes where a component is defined.
///
/// Direct definitions are checked in priority order:
/// 1. `export default function Name(`
/// 2. `export function Name(`
/// 3. `export default Name` (terminated by `;` or a line break)
/// 4. `function Name(`
///
/// Only when none of them match is the deferred form
/// `Name = lazy(() => import("./path"))` considered.
pub struct DefinitionMatcher {
    direct_patterns: Vec<(Regex, DefinitionKind)>,
    lazy_pattern: Regex,
}

impl DefinitionMatcher {
    pub fn new(lazy_wrappers: &[String]) -> Result<Self, regex::Error> {
        let direct_patterns = vec![
            (
                Regex::new(r"export\s+default\s+function\s+([A-Za-z0-9_]+)\s*\(")?,
                DefinitionKind::DefaultExport,
            ),
            (
                Regex::new(r"export\s+function\s+([A-Za-z0-9_]+)\s*\(")?,
                DefinitionKind::DirectExport,
            ),
            (
                Regex::new(r"export\s+default\s+([A-Za-z0-9_]+)\s*(?:;|\n|\r|$)")?,
                DefinitionKind::DefaultExport,
            ),
            (
                Regex::new(r"\bfunction\s+([A-Za-z0-9_]+)\s*\(")?,
                DefinitionKind::DirectExport,
            ),
        ];

        let wrappers = lazy_wrappers
            .iter()
            .map(|wrapper| regex::escape(wrapper))
            .collect::<Vec<_>>()
            .join("|");
        let lazy_pattern = Regex::new(&format!(
            r#"\b([A-Za-z0-9_]+)\s*=\s*(?:{wrappers})\(\s*\(\)\s*=>\s*import\(\s*["'](.*?)["']\s*\)\s*\)"#
        ))?;

        Ok(Self {
            direct_patterns,
            lazy_pattern,
        })
    }

    /// Probe `contents` for a definition of `component`
    pub fn find(&self, contents: &str, component: &str) -> Option<DefinitionMatch> {
        for (pattern, kind) in &self.direct_patterns {
            let defined = pattern
                .captures_iter(contents)
                .any(|caps| caps.get(1).map(|m| m.as_str()) == Some(component));
            if defined {
                return Some(DefinitionMatch::Defined(*kind));
            }
        }

        self.lazy_pattern
            .captures_iter(contents)
            .find(|caps| caps.get(1).map(|m| m.as_str()) == Some(component))
            .and_then(|caps| caps.get(2))
            .map(|specifier| DefinitionMatch::Lazy {
                specifier: specifier.as_str().to_string(),
            })
    }
}
