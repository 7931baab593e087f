use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Navigation call that produced a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAction {
    Navigate,
    Push,
    Replace,
    Reset,
}

impl NavigationAction {
    pub const ALL: [NavigationAction; 4] = [
        NavigationAction::Navigate,
        NavigationAction::Push,
        NavigationAction::Replace,
        NavigationAction::Reset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationAction::Navigate => "navigate",
            NavigationAction::Push => "push",
            NavigationAction::Replace => "replace",
            NavigationAction::Reset => "reset",
        }
    }
}

impl fmt::Display for NavigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "navigate" => Ok(NavigationAction::Navigate),
            "push" => Ok(NavigationAction::Push),
            "replace" => Ok(NavigationAction::Replace),
            "reset" => Ok(NavigationAction::Reset),
            other => Err(format!("unknown navigation action: {}", other)),
        }
    }
}

/// A transition from a screen to a route string found at a call site.
///
/// `target` is the literal string passed to the call. It is never checked
/// against screen names or declared routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationEdge {
    pub source: String,
    pub target: String,
    pub action: NavigationAction,
}

impl NavigationEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, action: NavigationAction) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            action,
        }
    }
}
