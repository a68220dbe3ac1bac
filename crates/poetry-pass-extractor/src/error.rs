//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Input is JSON but not a sequence of records
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A record carries a field of the wrong type
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the record in the input array
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
