//! Error types for slide generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the outline parser.
///
/// The parser itself never fails; these surface at the boundaries where a
/// deck is decoded from model output or handed to a renderer.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The language model returned something that is not a slide deck.
    #[error("Malformed slides response: {0}")]
    ResponseFormat(String),

    /// The operation does not apply to the current selection or document.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML generation error (for PPTX).
    #[error("XML error: {0}")]
    XmlError(String),
}
