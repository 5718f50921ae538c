/// Core traits for Shelf
use crate::error::MetadataError;
use crate::types::{Id3TagSet, Metadata};
use std::path::Path;

/// Metadata extractor trait
///
/// Implementers adapt a tag-reading library into the normalized `Metadata`
/// model. Only systemic failures are errors; a missing field is reported
/// through its sentinel value.
#[cfg_attr(test, mockall::automock)]
pub trait MetadataExtractor: Send + Sync {
    /// Extract normalized metadata from an audio file
    ///
    /// # Errors
    /// Returns `MetadataError::NotAudio` if the path is not recognized as audio,
    /// or `MetadataError::TagRead` if the underlying reader fails
    fn extract(&self, path: &Path) -> Result<Metadata, MetadataError>;

    /// Extract every raw tag field that carries a non-blank value
    ///
    /// Individual field failures are skipped.
    fn extract_raw_tags(&self, path: &Path) -> Result<Id3TagSet, MetadataError>;
}

/// MIME checker trait
///
/// Answers "what is this file" questions used by the file filter,
/// the metadata extractor, and `Mp3File::validate`.
#[cfg_attr(test, mockall::automock)]
pub trait MimeChecker: Send + Sync {
    /// Detect the MIME type of a file, `None` if unknown
    fn detect(&self, path: &Path) -> Option<String>;

    /// Whether the detected MIME type is any `audio/*` type
    fn is_audio(&self, path: &Path) -> bool {
        self.detect(path)
            .is_some_and(|mime| mime.to_ascii_lowercase().starts_with("audio/"))
    }

    /// Whether the file is an existing regular file of a supported audio kind
    fn is_mp3(&self, path: &Path) -> bool;
}
