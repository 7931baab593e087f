use super::EdgeScan;
use crate::graph::NavigationAction;
use regex::Regex;
use std::str::FromStr;
use tracing::trace;

/// Extracts navigation transitions from screen source.
///
/// Recognized call sites:
/// - `navigation.navigate("X")`, `props.navigation.push("X")`, `this.props.navigation.replace("X")`
/// - bare `navigate("X")`, as left behind by `const { navigate } = navigation`
/// - `navigation.reset("X")` etc. in files that call a navigation hook
///
/// `goBack()` / `popToTop()` carry no target and never produce a transition.
pub struct EdgeExtractor {
    member_pattern: Regex,
    bare_pattern: Regex,
    hook_pattern: Regex,
    hook_calls: Vec<String>,
}

impl EdgeExtractor {
    pub fn new(hooks: &[String]) -> Result<Self, regex::Error> {
        let actions = NavigationAction::ALL
            .iter()
            .map(|action| action.as_str())
            .collect::<Vec<_>>()
            .join("|");

        let member_pattern = Regex::new(&format!(
            r#"(?:this\.props\.navigation|props\.navigation|navigation)\.({actions})\(\s*["'](.*?)["']"#
        ))?;
        let bare_pattern = Regex::new(&format!(r#"\b({actions})\(\s*["'](.*?)["']"#))?;
        let hook_pattern = Regex::new(&format!(r#"navigation\.({actions})\(\s*["'](.*?)["']"#))?;

        Ok(Self {
            member_pattern,
            bare_pattern,
            hook_pattern,
            hook_calls: hooks.iter().map(|hook| format!("{}(", hook)).collect(),
        })
    }

    pub fn extract(&self, contents: &str) -> EdgeScan {
        let mut scan = EdgeScan::default();

        scan.imports = contents
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("import "))
            .map(str::to_string)
            .collect();

        Self::collect(&self.member_pattern, contents, &mut scan);
        Self::collect(&self.bare_pattern, contents, &mut scan);

        if self.hook_calls.iter().any(|call| contents.contains(call.as_str())) {
            Self::collect(&self.hook_pattern, contents, &mut scan);
        }

        scan
    }

    fn collect(pattern: &Regex, contents: &str, scan: &mut EdgeScan) {
        for caps in pattern.captures_iter(contents) {
            let (Some(action), Some(target)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if target.as_str().is_empty() {
                continue;
            }
            if let Ok(action) = NavigationAction::from_str(action.as_str()) {
                trace!("Transition {} -> {}", action, target.as_str());
                scan.transitions.insert((action, target.as_str().to_string()));
            }
        }
    }
}
