//! Runtime configuration, read once from the environment.
//!
//! fizzy-md cannot take flags of its own: the whole argument vector belongs
//! to fizzy. Knobs are environment variables instead.

use std::env;
use std::path::PathBuf;

/// Overrides the name of the executable looked up on `PATH`.
pub const DELEGATE_VAR: &str = "FIZZY_MD_DELEGATE";
/// When truthy, temp files are left behind after fizzy exits.
pub const KEEP_TEMP_VAR: &str = "FIZZY_MD_KEEP_TEMP";
/// Directory for staged temp files (defaults to the system temp dir).
pub const TEMP_DIR_VAR: &str = "FIZZY_MD_TMPDIR";
/// `env_logger` filter directives (e.g. `debug`).
pub const LOG_VAR: &str = "FIZZY_MD_LOG";

const DEFAULT_DELEGATE: &str = "fizzy";
const DEFAULT_LOG_FILTER: &str = "off";

/// Shown when the delegate cannot be found.
pub const INSTALL_HINT: &str = "Please install fizzy-cli: https://github.com/robzolkos/fizzy-cli";

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Executable name searched on `PATH`.
    pub delegate: String,
    /// Keep staged temp files instead of deleting them after fizzy exits.
    pub keep_temp: bool,
    /// Where staged temp files are created.
    pub temp_dir: PathBuf,
    /// Log filter directives.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delegate: DEFAULT_DELEGATE.to_string(),
            keep_temp: false,
            temp_dir: env::temp_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            delegate: get(DELEGATE_VAR).unwrap_or(defaults.delegate),
            keep_temp: get(KEEP_TEMP_VAR).is_some_and(|value| is_truthy(&value)),
            temp_dir: get(TEMP_DIR_VAR).map_or(defaults.temp_dir, PathBuf::from),
            log_filter: get(LOG_VAR).unwrap_or(defaults.log_filter),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
