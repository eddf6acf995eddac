//! Shared configuration loader for the marksmith toolchain.
//!
//! `defaults/marksmith.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`MarksmithConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/marksmith.default.toml");

/// Name of the per-directory configuration file.
pub const CONFIG_FILENAME: &str = "marksmith.toml";

/// Top-level configuration consumed by marksmith applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarksmithConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Conversion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Format used when nothing else selects one.
    pub format: String,
    pub document: DocumentConfig,
}

/// Knobs for the standalone `html-document` format.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub title: String,
    pub theme: String,
    /// Path of a stylesheet appended after the theme.
    pub custom_css: Option<String>,
}

impl DocumentConfig {
    /// Options understood by the `html-document` format.
    pub fn format_options(&self) -> HashMap<String, String> {
        let mut options = HashMap::new();
        options.insert("title".to_string(), self.title.clone());
        options.insert("theme".to_string(), self.theme.clone());
        if let Some(path) = &self.custom_css {
            options.insert("css-path".to_string(), path.clone());
        }
        options
    }
}

/// Controls `inspect` output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub skip_unchanged: bool,
    pub output: InspectOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectOutput {
    Text,
    Json,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MarksmithConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarksmithConfig, ConfigError> {
    Loader::new().build()
}
