//! Error types for loading tone-map documents and table configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an input document or config file.
///
/// Every variant carries the path of the offending file. I/O and JSON causes
/// are exposed through `source()`, not repeated in the message.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened or read.
    #[error("couldn't open '{}'", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid JSON.
    #[error("couldn't parse '{}' as JSON", .path.display())]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// JSON parsed, but it is not a tone-map document.
    #[error("JSON format not as expected in '{}': {}", .path.display(), .message)]
    UnexpectedShape { path: PathBuf, message: String },

    /// Config file parsed, but its content is invalid.
    #[error("invalid config '{}': {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },
}

impl LoadError {
    /// Creates a shape error for `path`.
    pub fn shape(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        LoadError::UnexpectedShape {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::FileRead { path, .. }
            | LoadError::JsonParse { path, .. }
            | LoadError::UnexpectedShape { path, .. }
            | LoadError::Config { path, .. } => path,
        }
    }
}
