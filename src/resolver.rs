//! File-content resolution for file-valued flags.
//!
//! Decides from the file extension whether content is already HTML
//! (passed through byte-for-byte) or markdown (converted). Unknown
//! extensions are treated as markdown: callers are mostly scripts and
//! agents, and raw markdown must never reach fizzy unrendered.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use log::debug;

use crate::converter::Converter;
use crate::error::{Error, Result};

/// How the content of a file must be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// `.html` / `.htm`: already rendered, staged unchanged.
    Rendered,
    /// `.md`, no extension, or anything else: converted first.
    Markdown,
}

impl ContentKind {
    /// Classifies a path by its lower-cased extension.
    pub fn of(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("html" | "htm") => Self::Rendered,
            // `.md`, no extension, and unknown extensions all convert.
            _ => Self::Markdown,
        }
    }
}

/// Reads `path` and returns HTML ready to hand to fizzy.
///
/// Markdown bytes are decoded lossily before conversion; rendered files are
/// returned exactly as read.
pub fn resolve(path: &Path, converter: &Converter) -> Result<Vec<u8>> {
    let content = fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let kind = ContentKind::of(path);
    debug!("resolved {} as {kind:?} ({} bytes)", path.display(), content.len());

    match kind {
        ContentKind::Rendered => Ok(content),
        ContentKind::Markdown => {
            let markdown = String::from_utf8_lossy(&content);
            Ok(converter.convert(&markdown)?.into_bytes())
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
