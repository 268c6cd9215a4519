//! Error types for the docrank library.

use std::io;
use thiserror::Error;

/// Result type alias for docrank operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A single document's layout could not be read.
    ///
    /// The pipeline absorbs this per document: the affected document
    /// contributes zero sections and the batch continues.
    #[error("Unreadable document '{document}': {reason}")]
    DocumentUnreadable {
        /// Identifier of the affected document
        document: String,
        /// What the layout reader reported
        reason: String,
    },

    /// The embedding model failed to load or is not present.
    ///
    /// Fatal to the current ranking or summarization operation.
    #[error("Embedding model unavailable: {0}")]
    ModelUnavailable(String),

    /// The embedding model failed while encoding a batch of texts.
    #[error("Embedding failed: {0}")]
    Encode(String),

    /// No sections could be extracted from any input document.
    #[error("No analyzable content found in the input documents")]
    NoAnalyzableContent,

    /// Error serializing an analysis report.
    #[error("Report serialization error: {0}")]
    Serialize(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoAnalyzableContent;
        assert_eq!(
            err.to_string(),
            "No analyzable content found in the input documents"
        );

        let err = Error::DocumentUnreadable {
            document: "report.pdf".to_string(),
            reason: "truncated xref table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unreadable document 'report.pdf': truncated xref table"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
