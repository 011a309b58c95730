//! Error types for doc-number extraction.
//!
//! Only `XmlParse` is raised by the extraction core. The file variants come
//! from input acquisition and are surfaced before any XML is seen.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{
    EXIT_IO_ERROR, EXIT_NOT_FOUND, EXIT_OUTPUT_ERROR, EXIT_PARSE_ERROR, EXIT_UNREADABLE_ENCODING,
};

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Input file does not exist.
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Input bytes could not be decoded with any supported encoding.
    ///
    /// The latin-1 fallback in `input` maps every byte, so file reading
    /// never returns this today; it stays part of the input error set.
    #[error("Failed to read file with any encoding: {}", .path.display())]
    UnreadableEncoding { path: PathBuf },

    /// A candidate fragment is not well-formed XML.
    #[error("Failed to parse XML: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Any other IO failure while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExtractorError {
    /// Process exit code reported by the CLI for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => EXIT_NOT_FOUND,
            Self::UnreadableEncoding { .. } => EXIT_UNREADABLE_ENCODING,
            Self::XmlParse(_) => EXIT_PARSE_ERROR,
            Self::Io(_) => EXIT_IO_ERROR,
            Self::Serialization(_) => EXIT_OUTPUT_ERROR,
        }
    }
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
