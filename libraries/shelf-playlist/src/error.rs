//! Error types for playlist output

use shelf_core::ShelfError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PlaylistWriteError`
pub type Result<T> = std::result::Result<T, PlaylistWriteError>;

#[derive(Debug, Error)]
pub enum PlaylistWriteError {
    #[error("Failed to write playlist {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PlaylistWriteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<PlaylistWriteError> for ShelfError {
    fn from(err: PlaylistWriteError) -> Self {
        match err {
            PlaylistWriteError::InvalidArgument(msg) => ShelfError::InvalidArgument(msg),
            PlaylistWriteError::Io { source, .. } => ShelfError::Io(source),
        }
    }
}
