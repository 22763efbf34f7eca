//! Error types and error handling for the docdex engine.
//!
//! This module defines the error types used throughout the
//! application. Output-format concerns (colored CLI messages)
//! live in the `cli` adapter, not here.

use thiserror::Error;

/// Result type alias for docdex operations
pub type Result<T> = std::result::Result<T, DocdexError>;

/// Main error type for the docdex engine
#[derive(Error, Debug)]
pub enum DocdexError {
    #[error("Corpus directory not found: {0}")]
    CorpusNotFound(String),

    #[error("Document read failed: {0}")]
    DocumentRead(String),

    #[error("Sink is not a valid index: {0}")]
    SinkParse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocdexError {
    /// Check if this error is recoverable by degrading to an empty index.
    ///
    /// Only sink parse failures qualify; everything else aborts the run.
    pub fn is_sink_parse(&self) -> bool {
        matches!(self, DocdexError::SinkParse(_))
    }
}
