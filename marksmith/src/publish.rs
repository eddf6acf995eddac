//! Document publishing pipeline.
//!
//! One call that renders Markdown with a named format and either hands the
//! text back (the "copy" path) or writes it to disk (the "download" path).
//!
//! For more control over rendering, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when publishing into a directory.
pub const DEFAULT_OUTPUT_FILENAME: &str = "converted-markdown.html";

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new("# Notes", "html-document")
///     .with_output_path("notes.html")
///     .with_option("theme", "serif");
/// ```
///
/// Without an output path the rendered text is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// Markdown source to render.
    pub markdown: &'a str,
    /// Target format name (e.g., "html", "html-document").
    pub format: &'a str,
    /// Optional file or directory to write to.
    pub output: Option<PathBuf>,
    /// Format-specific options (e.g., theme, title).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(markdown: &'a str, format: &'a str) -> Self {
        Self {
            markdown,
            format,
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the output path. An existing directory receives
    /// [`DEFAULT_OUTPUT_FILENAME`].
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options.extend(options);
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Rendered text held in memory.
    InMemory(String),
    /// Path of the written file.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Renders `spec.markdown` and delivers it where `spec` asks, using the default
/// format registry.
///
/// # Errors
///
/// Returns [`FormatError`] if the format is unknown, rejects an option, or
/// the output cannot be written.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let text = if spec.options.is_empty() {
        registry.render(spec.markdown, spec.format)?
    } else {
        registry.render_with_options(spec.markdown, spec.format, &spec.options)?
    };

    let artifact = match spec.output {
        Some(path) => PublishArtifact::File(write_to_path(resolve_output(path), &text)?),
        None => PublishArtifact::InMemory(text),
    };
    Ok(PublishResult { artifact })
}

fn resolve_output(path: PathBuf) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_OUTPUT_FILENAME)
    } else {
        path
    }
}

fn write_to_path(path: PathBuf, text: &str) -> Result<PathBuf, FormatError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| FormatError::io(parent, err))?;
    }
    fs::write(&path, text).map_err(|err| FormatError::io(&path, err))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "published document");
    Ok(path)
}
