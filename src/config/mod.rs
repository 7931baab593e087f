mod loader;

pub use loader::{Config, LimitConfig, NavigationConfig, ReportConfig, ScreenConfig};
pub(crate) use loader::matches_any;
