//! Error types for nbreport library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nbreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a report.
#[derive(Error, Debug)]
pub enum Error {
    /// An input path does not exist.
    #[error("Input not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// An input exists but could not be read as a notebook.
    #[error("Cannot read notebook {}: {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// The content is not a notebook document at all.
    #[error("Not a notebook: {0}")]
    NotNotebook(String),

    /// The nbformat major version is not supported.
    #[error("Unsupported nbformat version: {0}")]
    UnsupportedVersion(u64),

    /// The notebook structure does not match the nbformat schema.
    #[error("Notebook parsing error: {0}")]
    NotebookParse(String),

    /// The renderer could not produce output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The report could not be written.
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap a reader error with the path it came from.
    pub fn document_read(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::DocumentRead {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingInput(PathBuf::from("missing.ipynb"));
        assert_eq!(err.to_string(), "Input not found: missing.ipynb");

        let err = Error::UnsupportedVersion(2);
        assert_eq!(err.to_string(), "Unsupported nbformat version: 2");
    }

    #[test]
    fn test_document_read_wraps_source() {
        let err = Error::document_read("a.ipynb", Error::NotNotebook("empty".into()));
        assert_eq!(
            err.to_string(),
            "Cannot read notebook a.ipynb: Not a notebook: empty"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
