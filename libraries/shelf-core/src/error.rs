/// Core error types for Shelf
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ShelfError`
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Boxed cause carried by wrapping errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for Shelf
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Invalid input to a core operation, detected before any I/O
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Metadata extraction failed
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShelfError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Systemic metadata extraction failures
///
/// Missing individual fields never produce one of these; they are reported
/// through sentinel values on the extracted `Metadata`.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The path is not recognized as an audio file
    #[error("Not an audio file: {}", .0.display())]
    NotAudio(PathBuf),

    /// The tag-reading library failed on this file
    #[error("Failed to read tags from {}: {source}", path.display())]
    TagRead {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl MetadataError {
    /// Wrap a tag-reading failure, preserving the original cause
    pub fn tag_read(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::TagRead {
            path: path.into(),
            source: source.into(),
        }
    }
}
