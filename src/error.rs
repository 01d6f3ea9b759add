//! Error taxonomy for the conversion and delegation pipeline.
//!
//! Every failure here is fatal for the current run. A delegate that runs
//! and exits non-zero is *not* an error: its status is passed through as-is.

use std::io;
use std::path::PathBuf;

/// Errors raised while converting, rewriting, or delegating.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The markdown renderer rejected its input.
    #[error("markdown conversion failed")]
    Conversion(#[source] std::fmt::Error),

    /// A file-valued flag pointed at a path that could not be read.
    #[error("failed to read file {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An intercepted flag was the last element of the argument vector.
    #[error("flag {flag} requires {expects}")]
    MissingFlagValue { flag: String, expects: &'static str },

    /// Converting or resolving the value of an intercepted flag failed.
    #[error("converting {flag}")]
    Flag {
        flag: String,
        #[source]
        source: Box<Error>,
    },

    /// A temporary artifact could not be created, written, or kept.
    #[error("failed to write temp file")]
    TempArtifact(#[source] io::Error),

    /// The delegate executable is not on the search path.
    #[error("{name} command not found in PATH")]
    DelegateNotFound {
        name: String,
        install_hint: &'static str,
        #[source]
        source: which::Error,
    },

    /// The delegate executable exists but could not be started.
    #[error("failed to run {}", path.display())]
    DelegateExecution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Piped standard input could not be read.
    #[error("failed to read stdin")]
    Stdin(#[source] io::Error),

    /// Converted output could not be written to standard output.
    #[error("failed to write stdout")]
    Stdout(#[source] io::Error),
}

impl Error {
    /// Wraps `self` with the flag whose value triggered it.
    pub fn for_flag(self, flag: &str) -> Self {
        Self::Flag {
            flag: flag.to_string(),
            source: Box::new(self),
        }
    }
}

/// Shorthand used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
