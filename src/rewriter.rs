//! Argument rewriting: finds the markdown-carrying flags in a command line
//! and swaps their values for HTML.
//!
//! Only four flag names are intercepted, by exact match. Everything else,
//! including unknown flags and their values, is forwarded untouched and in
//! order. The rewriter never interprets fizzy's own flag grammar.

use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempPath;

use crate::converter::Converter;
use crate::error::{Error, Result};
use crate::resolver;

/// How an intercepted flag's value is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagMode {
    /// The value is markdown text, replaced by its HTML.
    Inline,
    /// The value is a file path, replaced by the path of a temp file
    /// holding the resolved HTML.
    File,
}

impl FlagMode {
    /// What the flag expects as its value, for error messages.
    fn expects(self) -> &'static str {
        match self {
            Self::Inline => "a value",
            Self::File => "a file path",
        }
    }
}

/// Intercepted flag names. Primary name first, alias second.
const INTERCEPTED_FLAGS: &[(&str, FlagMode)] = &[
    ("--description", FlagMode::Inline),
    ("--body", FlagMode::Inline),
    ("--description_file", FlagMode::File),
    ("--body_file", FlagMode::File),
];

/// Prefix and suffix of the temp files staged for file-mode flags.
const ARTIFACT_PREFIX: &str = "fizzy-md-";
const ARTIFACT_SUFFIX: &str = ".html";

/// Returns the conversion mode for `arg` if it is an intercepted flag.
pub fn flag_mode(arg: &OsStr) -> Option<FlagMode> {
    let arg = arg.to_str()?;
    INTERCEPTED_FLAGS
        .iter()
        .find(|(name, _)| *name == arg)
        .map(|&(_, mode)| mode)
}

/// A rewritten argument vector plus the temp files it references.
///
/// The temp files are deleted when this value is dropped, so it must
/// outlive the delegate process. Call [`Rewritten::keep_artifacts`] to
/// leave them on disk instead.
#[derive(Debug)]
pub struct Rewritten {
    /// The argument vector to hand to fizzy.
    pub args: Vec<OsString>,
    artifacts: Vec<TempPath>,
}

impl Rewritten {
    /// Paths of every temp file created during rewriting, in creation order.
    pub fn artifact_paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|path| &**path)
    }

    /// Detaches all temp files so they survive this process.
    pub fn keep_artifacts(&mut self) -> Result<Vec<PathBuf>> {
        self.artifacts
            .drain(..)
            .map(|path| path.keep().map_err(|err| Error::TempArtifact(err.error)))
            .collect()
    }
}

/// Rewrites argument vectors using a shared converter.
pub struct Rewriter<'a> {
    converter: &'a Converter,
    temp_dir: PathBuf,
}

impl<'a> Rewriter<'a> {
    /// Creates a rewriter that stages temp files in the system temp dir.
    pub fn new(converter: &'a Converter) -> Self {
        Self {
            converter,
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Stages temp files in `dir` instead of the system temp dir.
    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    /// Scans `args` left to right and converts intercepted flag values.
    ///
    /// A (flag, value) pair is replaced as a unit; every other element is
    /// copied as-is. On error no vector is produced and any temp files
    /// already staged are removed.
    pub fn rewrite<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<Rewritten> {
        let mut out = Vec::with_capacity(args.len());
        let mut artifacts = Vec::new();
        let mut iter = args.iter().map(S::as_ref);

        while let Some(arg) = iter.next() {
            let Some(mode) = flag_mode(arg) else {
                out.push(arg.to_os_string());
                continue;
            };
            // `flag_mode` only matches valid utf-8.
            let flag = arg.to_string_lossy();

            let value = iter.next().ok_or_else(|| Error::MissingFlagValue {
                flag: flag.to_string(),
                expects: mode.expects(),
            })?;

            let replacement = match mode {
                FlagMode::Inline => {
                    let html = self
                        .converter
                        .convert(&value.to_string_lossy())
                        .map_err(|err| err.for_flag(&flag))?;
                    debug!("converted inline value of {flag}");
                    OsString::from(html)
                }
                FlagMode::File => {
                    let html = resolver::resolve(Path::new(value), self.converter)
                        .map_err(|err| err.for_flag(&flag))?;
                    let artifact = self.stage(&html)?;
                    debug!(
                        "staged {} for {flag} at {}",
                        Path::new(value).display(),
                        artifact.display()
                    );
                    let path = artifact.as_os_str().to_os_string();
                    artifacts.push(artifact);
                    path
                }
            };

            out.push(arg.to_os_string());
            out.push(replacement);
        }

        Ok(Rewritten {
            args: out,
            artifacts,
        })
    }

    /// Writes `content` to a fresh, uniquely named temp file.
    fn stage(&self, content: &[u8]) -> Result<TempPath> {
        let mut file = tempfile::Builder::new()
            .prefix(ARTIFACT_PREFIX)
            .suffix(ARTIFACT_SUFFIX)
            .tempfile_in(&self.temp_dir)
            .map_err(Error::TempArtifact)?;

        file.write_all(content).map_err(Error::TempArtifact)?;
        file.flush().map_err(Error::TempArtifact)?;

        Ok(file.into_temp_path())
    }
}

#[cfg(test)]
#[path = "rewriter_tests.rs"]
mod tests;
