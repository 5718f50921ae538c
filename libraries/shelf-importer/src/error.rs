//! Error types for the importer

use shelf_core::{MetadataError, ShelfError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ImportError`
pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImportError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ImportError> for ShelfError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::InvalidArgument(msg) | ImportError::Config(msg) => {
                ShelfError::InvalidArgument(msg)
            }
            ImportError::Io { source, .. } => ShelfError::Io(source),
            ImportError::Metadata(e) => ShelfError::Metadata(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = ImportError::io(
            "/music/locked",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "IO error on /music/locked: denied");
    }

    #[test]
    fn converts_into_shelf_error() {
        let err: ShelfError = ImportError::invalid_argument("root is not a directory").into();
        assert!(matches!(err, ShelfError::InvalidArgument(_)));

        let err: ShelfError = ImportError::io(
            "/x",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        )
        .into();
        assert!(matches!(err, ShelfError::Io(_)));
    }
}
