//! Error types for fixturegen.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fixturegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or writing fixtures.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing files or creating directories.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content type tag does not name a known fixture.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// No renderer exists for the requested output format.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Fixtures need at least one page.
    #[error("Invalid page count: {0} (must be at least 1)")]
    InvalidPageCount(u32),

    /// A rendering backend was not compiled in.
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// Error while turning a document tree into output bytes.
    #[error("Rendering error: {0}")]
    Render(String),

    /// A batch item failed; the batch stops here.
    #[error("Failed to generate {}: {source}", path.display())]
    Generation {
        /// Target file of the failed item
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error as the failure of a single batch item.
    pub fn generation(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::Generation {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error (or the error it wraps) is a missing backend.
    pub fn is_missing_dependency(&self) -> bool {
        match self {
            Error::MissingDependency(_) => true,
            Error::Generation { source, .. } => source.is_missing_dependency(),
            _ => false,
        }
    }
}

#[cfg(feature = "pdf")]
impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::Render(format!("PDF backend: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedContentType("poster".to_string());
        assert_eq!(err.to_string(), "Unsupported content type: poster");

        let err = Error::InvalidPageCount(0);
        assert_eq!(
            err.to_string(),
            "Invalid page count: 0 (must be at least 1)"
        );
    }

    #[test]
    fn test_generation_display() {
        let err = Error::generation("out/large.pdf", Error::Render("boom".into()));
        assert_eq!(
            err.to_string(),
            "Failed to generate out/large.pdf: Rendering error: boom"
        );
    }

    #[test]
    fn test_missing_dependency_through_generation() {
        let err = Error::generation("a.pdf", Error::MissingDependency("pdf".into()));
        assert!(err.is_missing_dependency());
        assert!(!Error::InvalidPageCount(0).is_missing_dependency());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
