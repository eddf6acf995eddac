//! Format implementations
//!
//! - [`HtmlFormat`]: the bare fragment produced by the transformer.
//! - [`DocumentFormat`]: the fragment inside a standalone, styled HTML page.

pub mod document;
pub mod html;

pub use document::{default_css, DocumentFormat, DocumentOptions, DocumentTheme};
pub use html::HtmlFormat;
