//! Format trait definition
//!
//! Every output format takes Markdown source and produces text. The trait gives
//! the registry, the publish pipeline and the CLI one uniform way to drive them.

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn render(&self, markdown: &str) -> Result<String, FormatError> {
///         Ok(marksmith::parse(markdown).to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "html-document")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used to pick a format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render Markdown source into this format.
    fn render(&self, markdown: &str) -> Result<String, FormatError>;

    /// Render with format-specific parameters.
    ///
    /// The default implementation accepts an empty option map only.
    fn render_with_options(
        &self,
        markdown: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.render(markdown)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
