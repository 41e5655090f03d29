//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for docindex operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at the application edges (CLI, store, tool handlers).
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a search index fails.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Index file not found at the expected path.
    #[error("Search index not found at {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading the index file failed for a reason other than absence.
    #[error("Failed to read search index at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON or does not match the entry schema.
    #[error("Malformed search index at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Neither a `var x = ...` assignment nor a bare JSON payload was found.
    #[error("No search index payload found (expected `var <name> = {{\"docs\": [...]}}`)")]
    MissingPayload,
}

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        Self::Syntax {
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}

/// Error returned when an index fails schema validation.
#[derive(Debug, Error)]
#[error("Search index failed validation with {count} error(s); first: {first}")]
pub struct ValidationError {
    pub count: usize,
    pub first: String,
}
