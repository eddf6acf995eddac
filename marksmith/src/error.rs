//! Error types for format operations

use std::path::PathBuf;

/// Errors that can occur while rendering or publishing.
///
/// The transformer itself never fails; these come from format lookup, option
/// handling and file I/O around it.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    /// Format does not accept the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FormatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FormatError::Io {
            path: path.into(),
            source,
        }
    }
}
