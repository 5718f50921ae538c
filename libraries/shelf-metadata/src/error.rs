/// Tag-reading errors
use thiserror::Error;

/// Result type alias using `TagReadError`
pub type Result<T> = std::result::Result<T, TagReadError>;

/// Failure to read a file's tags as a whole
#[derive(Error, Debug)]
pub enum TagReadError {
    /// Unsupported or unrecognized container
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Lofty error
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}

/// Failure to read one field
///
/// These never escape the extractor; the field is treated as missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is not available for this file
    #[error("Field not available: {0}")]
    Unavailable(&'static str),

    /// The field holds a value that is not text
    #[error("Field {0} is not text")]
    NotText(String),

    /// The field could not be decoded
    #[error("Field {field} is malformed: {reason}")]
    Malformed { field: String, reason: String },
}
