//! Startup settings read from the environment.

use std::str::FromStr;

use log::LevelFilter;

/// `0`, `false`, `off` or `no` start the page with arrow keys disabled.
pub const ARROW_KEYS_VAR: &str = "DISCLOSURE_ARROW_KEYS";

/// Log level filter for the log file (`off`, `error`, ..., `trace`).
pub const LOG_LEVEL_VAR: &str = "DISCLOSURE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub use_arrow_keys: bool,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_arrow_keys: true,
            log_level: LevelFilter::Debug,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from a variable lookup. Unparseable values keep the
    /// default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(enabled) = lookup(ARROW_KEYS_VAR).as_deref().and_then(parse_flag) {
            settings.use_arrow_keys = enabled;
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR).and_then(|v| LevelFilter::from_str(v.trim()).ok()) {
            settings.log_level = level;
        }

        settings
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
