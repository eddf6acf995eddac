//! Standalone HTML document format
//!
//! Produces the same fragment as the `html` format, wrapped in a complete
//! HTML5 page with embedded CSS. This is the file a user downloads.
//!
//! # CSS and Theming
//!
//! - `css/baseline.css`: typography and block styling, always included
//! - `css/themes/theme-*.css`: optional overrides layered on top
//! - custom CSS (inline text or a file) is appended last
//!
//! [`DocumentTheme::Modern`] injects an empty stylesheet so the baseline alone
//! controls rendering.
//!
//! # Options
//!
//! | Key        | Value                                   |
//! |------------|-----------------------------------------|
//! | `title`    | `<title>` text (escaped)                |
//! | `theme`    | `modern` (alias `default`) or `serif`   |
//! | `css-path` | stylesheet file appended after theme    |
//! | `css`      | inline CSS appended after `css-path`    |

mod template;

use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;
use std::fs;

pub use template::default_css;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Converted Markdown";

/// Available CSS themes for document export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentTheme {
    /// Baseline look (no overrides)
    #[default]
    Modern,
    /// Serif typography override
    Serif,
}

impl DocumentTheme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "modern" | "default" => Some(DocumentTheme::Modern),
            "serif" => Some(DocumentTheme::Serif),
            _ => None,
        }
    }

    /// Like [`from_name`](Self::from_name), falling back to `Modern`.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown theme, falling back to modern");
            DocumentTheme::Modern
        })
    }
}

/// Options for document rendering
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    pub title: String,
    pub theme: DocumentTheme,
    /// CSS appended after the baseline and theme stylesheets
    pub custom_css: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: DocumentTheme::Modern,
            custom_css: None,
        }
    }
}

impl DocumentOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_theme(mut self, theme: DocumentTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    fn append_css(&mut self, css: &str) {
        match &mut self.custom_css {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(css);
            }
            None => self.custom_css = Some(css.to_string()),
        }
    }
}

/// Format implementation for standalone HTML documents
#[derive(Debug, Clone, Default)]
pub struct DocumentFormat {
    defaults: DocumentOptions,
}

impl DocumentFormat {
    pub fn new(options: DocumentOptions) -> Self {
        Self { defaults: options }
    }

    pub fn with_theme(theme: DocumentTheme) -> Self {
        Self::new(DocumentOptions::default().with_theme(theme))
    }

    /// Render with explicit options, bypassing the string option map.
    pub fn render_document(&self, markdown: &str, options: &DocumentOptions) -> String {
        template::wrap_in_document(&crate::parse(markdown), options)
    }

    fn options_from_map(
        &self,
        options: &HashMap<String, String>,
    ) -> Result<DocumentOptions, FormatError> {
        if let Some(key) = options
            .keys()
            .find(|key| !matches!(key.as_str(), "title" | "theme" | "css" | "css-path"))
        {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not accept option '{key}'",
                self.name()
            )));
        }

        let mut resolved = self.defaults.clone();
        if let Some(title) = options.get("title") {
            resolved.title = title.clone();
        }
        if let Some(theme) = options.get("theme") {
            resolved.theme = DocumentTheme::resolve(theme);
        }
        if let Some(path) = options.get("css-path") {
            let css = fs::read_to_string(path).map_err(|err| FormatError::io(path, err))?;
            resolved.append_css(&css);
        }
        if let Some(css) = options.get("css") {
            resolved.append_css(css);
        }
        Ok(resolved)
    }
}

impl Format for DocumentFormat {
    fn name(&self) -> &str {
        "html-document"
    }

    fn description(&self) -> &str {
        "Standalone HTML5 document with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn render(&self, markdown: &str) -> Result<String, FormatError> {
        Ok(self.render_document(markdown, &self.defaults))
    }

    fn render_with_options(
        &self,
        markdown: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let resolved = self.options_from_map(options)?;
        Ok(self.render_document(markdown, &resolved))
    }
}
