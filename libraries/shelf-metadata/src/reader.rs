/// Tag-reading collaborator contract
///
/// The extractor only sees this normalized shape, never the tag library
/// behind it.
use crate::error::{FieldError, Result};
use shelf_core::CoverImage;
use std::fmt;
use std::path::Path;

/// Descriptive fields the extractor looks up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Title,
    Artist,
    Album,
    Genre,
    Year,
    TrackNumber,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Artist => "ARTIST",
            Self::Album => "ALBUM",
            Self::Genre => "GENRE",
            Self::Year => "YEAR",
            Self::TrackNumber => "TRACK",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw field as stored in the tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    /// Identifier of the field in the tag
    pub id: String,

    /// Human readable name
    pub description: String,

    /// Text value, or why it could not be read
    pub value: std::result::Result<String, FieldError>,
}

/// Textual tag of one file
pub trait RawTag: Send {
    /// First text value of a field, `None` if absent
    fn field(&self, key: FieldKey) -> std::result::Result<Option<String>, FieldError>;

    /// Every raw field stored in the tag
    fn raw_fields(&self) -> std::result::Result<Vec<RawField>, FieldError>;

    /// First embedded artwork, `None` if there is none
    fn first_artwork(&self) -> std::result::Result<Option<CoverImage>, FieldError>;
}

/// Technical audio header of one file
pub trait RawHeader: Send {
    /// Track length in seconds
    fn track_length_secs(&self) -> f64;

    fn bitrate_kbps(&self) -> std::result::Result<u32, FieldError>;

    fn sample_rate_hz(&self) -> std::result::Result<u32, FieldError>;

    fn channels(&self) -> std::result::Result<String, FieldError>;

    fn format(&self) -> std::result::Result<String, FieldError>;

    fn encoding_type(&self) -> std::result::Result<String, FieldError>;
}

/// Everything a tag reader found in a file
#[derive(Default)]
pub struct RawTags {
    pub tag: Option<Box<dyn RawTag>>,
    pub header: Option<Box<dyn RawHeader>>,
}

impl fmt::Debug for RawTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawTags")
            .field("tag", &self.tag.is_some())
            .field("header", &self.header.is_some())
            .finish()
    }
}

/// Reads raw tags and audio header from a file
pub trait TagReader: Send + Sync {
    /// Read a file's tag and header
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or parsed at all
    fn read(&self, path: &Path) -> Result<RawTags>;
}
