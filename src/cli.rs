//! Command-line surface of fizzy-md.
//!
//! The argument vector belongs to fizzy, so nothing is parsed here beyond
//! deciding which of the three top-level paths a run takes.

use std::ffi::OsString;

/// Name printed in the version line and diagnostics.
pub const PROGRAM: &str = "fizzy-md";

/// Crate version baked in at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sole-argument flags that print the version.
const VERSION_FLAGS: &[&str] = &["--version", "-v"];

/// The path a run takes, decided from the raw argument vector alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// `fizzy-md --version` / `fizzy-md -v`.
    Version,
    /// No arguments: convert stdin if it is piped, else fall through to fizzy.
    NoArgs,
    /// Anything else: rewrite and forward to fizzy.
    Forward,
}

impl Invocation {
    /// Classifies `args` (program name excluded).
    pub fn classify(args: &[OsString]) -> Self {
        match args {
            [] => Self::NoArgs,
            [only] if only.to_str().is_some_and(|arg| VERSION_FLAGS.contains(&arg)) => Self::Version,
            _ => Self::Forward,
        }
    }
}

/// `fizzy-md version <version>`
pub fn version_line() -> String {
    format!("{PROGRAM} version {VERSION}")
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
