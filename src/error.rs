//! Error types for issuedigest library.

use std::io;
use thiserror::Error;

/// Result type alias for issuedigest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while locating or composing a digest.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No issue folder or no matching artifact could be resolved.
    #[error("Issue not found: {0}")]
    NotFound(String),

    /// The remote directory listing could not be fetched or decoded.
    #[error("Listing error: {0}")]
    Listing(String),

    /// Error reading or writing PDF structure.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Error during page layout or output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error means no issue could be resolved.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotFound("no dated folders under TE/2026".to_string());
        assert_eq!(
            err.to_string(),
            "Issue not found: no dated folders under TE/2026"
        );

        let err = Error::Listing("HTTP 404".to_string());
        assert_eq!(err.to_string(), "Listing error: HTTP 404");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::NotFound("x".into()).is_not_found());
        assert!(!Error::Render("x".into()).is_not_found());
    }
}
