//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for returnlint operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The front-end produced no tree at all
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The parser could not be set up for the grammar
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Directory traversal errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// Invalid exclude pattern
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
