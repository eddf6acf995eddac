//! HTML fragment format
//!
//! Output is exactly what [`crate::parse`] returns: a fragment meant to be
//! injected into an existing page. Wrapping it into a full document is the
//! job of [`crate::formats::DocumentFormat`].

use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for bare HTML fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment (no document wrapper)"
    }

    fn render(&self, markdown: &str) -> Result<String, FormatError> {
        Ok(crate::parse(markdown))
    }
}
