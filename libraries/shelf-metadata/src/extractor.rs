/// Metadata extraction into the normalized model
use crate::error::FieldError;
use crate::lofty_reader::LoftyTagReader;
use crate::reader::{FieldKey, RawHeader, RawTag, TagReader};
use shelf_core::types::normalize_text;
use shelf_core::{Id3Tag, Id3TagSet, Metadata, MetadataError, MetadataExtractor, MimeChecker};
use std::path::Path;
use std::sync::Arc;

/// Metadata extractor backed by a tag reader
///
/// Missing or unreadable fields never fail an extraction; they are left at
/// their sentinel value.
#[derive(Clone)]
pub struct LibraryMetadataExtractor {
    mime: Arc<dyn MimeChecker>,
    reader: Arc<dyn TagReader>,
}

impl LibraryMetadataExtractor {
    /// Create an extractor from a MIME checker and a tag reader
    pub fn new(mime: Arc<dyn MimeChecker>, reader: Arc<dyn TagReader>) -> Self {
        Self { mime, reader }
    }

    /// Create an extractor reading tags with lofty
    pub fn with_lofty(mime: Arc<dyn MimeChecker>) -> Self {
        Self::new(mime, Arc::new(LoftyTagReader::new()))
    }

    fn read_text(tag: &dyn RawTag, key: FieldKey) -> Option<String> {
        match tag.field(key) {
            Ok(value) => normalize_text(value),
            Err(e) => {
                tracing::trace!("Skipping field {}: {}", key, e);
                None
            }
        }
    }

    /// Parse a numeric field from its digits, 0 if absent or unparsable
    fn read_number(tag: &dyn RawTag, key: FieldKey) -> u32 {
        Self::read_text(tag, key)
            .map(|text| text.chars().filter(char::is_ascii_digit).collect::<String>())
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(0)
    }

    fn fill_from_tag(builder: &mut shelf_core::MetadataBuilder, tag: &dyn RawTag) {
        builder.title = Self::read_text(tag, FieldKey::Title);
        builder.artist = Self::read_text(tag, FieldKey::Artist);
        builder.album = Self::read_text(tag, FieldKey::Album);
        builder.genre = Self::read_text(tag, FieldKey::Genre);
        builder.year = Self::read_number(tag, FieldKey::Year);
        builder.track_number = Self::read_number(tag, FieldKey::TrackNumber);

        builder.cover = match tag.first_artwork() {
            Ok(cover) => cover.filter(|c| !c.is_empty()),
            Err(e) => {
                tracing::trace!("Skipping artwork: {}", e);
                None
            }
        };
    }

    fn fill_from_header(builder: &mut shelf_core::MetadataBuilder, header: &dyn RawHeader) {
        let length = header.track_length_secs();
        if length.is_finite() && length >= 0.0 {
            builder.duration_secs = length;
        }

        builder.bitrate_kbps = isolated("bitrate", header.bitrate_kbps()).unwrap_or(0);
        builder.sample_rate_hz = isolated("sample rate", header.sample_rate_hz()).unwrap_or(0);
        builder.channels = isolated("channels", header.channels());
        builder.format = isolated("format", header.format());
        builder.encoding_type = isolated("encoding type", header.encoding_type());
    }
}

fn isolated<T>(name: &str, value: Result<T, FieldError>) -> Option<T> {
    value
        .map_err(|e| tracing::trace!("Skipping {}: {}", name, e))
        .ok()
}

impl MetadataExtractor for LibraryMetadataExtractor {
    fn extract(&self, path: &Path) -> Result<Metadata, MetadataError> {
        if !self.mime.is_audio(path) {
            return Err(MetadataError::NotAudio(path.to_path_buf()));
        }

        let raw = self
            .reader
            .read(path)
            .map_err(|e| MetadataError::tag_read(path, e))?;

        let mut builder = Metadata::builder();
        if let Some(tag) = raw.tag.as_deref() {
            Self::fill_from_tag(&mut builder, tag);
        }
        if let Some(header) = raw.header.as_deref() {
            Self::fill_from_header(&mut builder, header);
        }

        let metadata = builder
            .build()
            .map_err(|e| MetadataError::tag_read(path, e))?;

        tracing::debug!(
            "Extracted metadata from {}: title={:?} artist={:?} duration={}s",
            path.display(),
            metadata.title(),
            metadata.artist(),
            metadata.duration_secs()
        );

        Ok(metadata)
    }

    fn extract_raw_tags(&self, path: &Path) -> Result<Id3TagSet, MetadataError> {
        let raw = self
            .reader
            .read(path)
            .map_err(|e| MetadataError::tag_read(path, e))?;

        let mut set = Id3TagSet::new();
        let Some(tag) = raw.tag else {
            return Ok(set);
        };

        let fields = match tag.raw_fields() {
            Ok(fields) => fields,
            Err(e) => {
                tracing::trace!("Cannot enumerate tags of {}: {}", path.display(), e);
                return Ok(set);
            }
        };

        for field in fields {
            let value = match field.value {
                Ok(value) if !value.trim().is_empty() => value,
                Ok(_) => continue,
                Err(e) => {
                    tracing::trace!("Skipping raw field {}: {}", field.id, e);
                    continue;
                }
            };

            // First occurrence of a repeated field wins
            if field.id.is_empty() || set.contains(&field.id) {
                continue;
            }
            if let Err(e) = set.insert(Id3Tag::new(field.id, field.description, value)) {
                tracing::trace!("Skipping raw field: {}", e);
            }
        }

        Ok(set)
    }
}
