//! Error types for mdreport library.

use std::io;
use thiserror::Error;

/// Result type alias for mdreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing a report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source file is not valid UTF-8 text.
    #[error("Source is not valid UTF-8 text (first invalid byte at offset {offset})")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence
        offset: usize,
    },

    /// Error building or serializing the PDF structure.
    #[error("PDF writing error: {0}")]
    Pdf(String),

    /// Error producing a rendering (block dump, statistics).
    #[error("Rendering error: {0}")]
    Render(String),

    /// The options file could not be parsed.
    #[error("Invalid options: {0}")]
    Config(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
