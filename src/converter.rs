//! Markdown → HTML bridge: wraps pulldown-cmark behind a single `Converter` type.
//!
//! This is a **leaf module**. The rest of the codebase converts text
//! exclusively through `Converter::convert()`, so `pulldown_cmark` types
//! never leak into the rewriter, resolver, or pipe adapter.

use log::trace;
use pulldown_cmark::{Options, Parser, html};

use crate::error::{Error, Result};

/// A configured markdown renderer, built once at startup and shared by
/// reference with every component that converts text.
///
/// Tables are enabled. Raw HTML in the source is passed through untouched
/// (pulldown-cmark never escapes embedded tags).
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Creates a converter with table support enabled.
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES,
        }
    }

    /// Converts a markdown document to an HTML fragment.
    ///
    /// The renderer terminates every block with `\n`; exactly one trailing
    /// newline is removed so single-block output has no stray line break.
    pub fn convert(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);

        let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::write_html_fmt(&mut out, parser).map_err(Error::Conversion)?;

        if out.ends_with('\n') {
            out.pop();
        }
        trace!("converted {} bytes of markdown into {} bytes of html", markdown.len(), out.len());
        Ok(out)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "converter_tests.rs"]
mod tests;
