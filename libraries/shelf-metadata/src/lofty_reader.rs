/// Tag reader implementation using lofty
use crate::error::{FieldError, Result, TagReadError};
use crate::reader::{FieldKey, RawField, RawHeader, RawTag, RawTags, TagReader};
use lofty::{
    AudioFile, FileProperties, FileType, ItemKey, PictureInformation, Probe, TaggedFileExt,
};
use shelf_core::CoverImage;
use std::path::Path;

/// Tag reader using the lofty library
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagReader;

impl LoftyTagReader {
    /// Create a new tag reader
    pub fn new() -> Self {
        Self
    }
}

impl TagReader for LoftyTagReader {
    fn read(&self, path: &Path) -> Result<RawTags> {
        if !path.is_file() {
            return Err(TagReadError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )));
        }

        let tagged_file = Probe::open(path)?.read()?;

        // Prefer the format's primary tag (ID3v2 for MP3)
        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .cloned();

        tracing::trace!(
            "Read {} ({:?}), tag present: {}",
            path.display(),
            tagged_file.file_type(),
            tag.is_some()
        );

        Ok(RawTags {
            tag: tag.map(|tag| Box::new(LoftyTag { tag }) as Box<dyn RawTag>),
            header: Some(Box::new(LoftyHeader {
                properties: tagged_file.properties().clone(),
                file_type: tagged_file.file_type(),
            })),
        })
    }
}

struct LoftyTag {
    tag: lofty::Tag,
}

impl LoftyTag {
    fn item_keys(key: FieldKey) -> &'static [ItemKey] {
        match key {
            FieldKey::Title => &[ItemKey::TrackTitle],
            FieldKey::Artist => &[ItemKey::TrackArtist],
            FieldKey::Album => &[ItemKey::AlbumTitle],
            FieldKey::Genre => &[ItemKey::Genre],
            FieldKey::Year => &[ItemKey::Year, ItemKey::RecordingDate],
            FieldKey::TrackNumber => &[ItemKey::TrackNumber],
        }
    }

    fn field_id(key: &ItemKey) -> String {
        match key {
            ItemKey::Unknown(id) => id.clone(),
            other => format!("{other:?}"),
        }
    }
}

impl RawTag for LoftyTag {
    fn field(&self, key: FieldKey) -> std::result::Result<Option<String>, FieldError> {
        Ok(Self::item_keys(key)
            .iter()
            .find_map(|item_key| self.tag.get_string(item_key))
            .map(str::to_string))
    }

    fn raw_fields(&self) -> std::result::Result<Vec<RawField>, FieldError> {
        Ok(self
            .tag
            .items()
            .map(|item| {
                let id = Self::field_id(item.key());
                let value = item
                    .value()
                    .text()
                    .map(str::to_string)
                    .ok_or_else(|| FieldError::NotText(id.clone()));
                RawField {
                    description: id.clone(),
                    id,
                    value,
                }
            })
            .collect())
    }

    fn first_artwork(&self) -> std::result::Result<Option<CoverImage>, FieldError> {
        let Some(picture) = self.tag.pictures().first() else {
            return Ok(None);
        };

        // Dimensions are best effort, the image bytes are what matter
        let (width, height) = PictureInformation::from_picture(picture)
            .map(|info| (info.width, info.height))
            .unwrap_or((0, 0));

        Ok(Some(CoverImage::new(
            picture.data(),
            picture.mime_type().map(|m| m.as_str().to_string()),
            width,
            height,
        )))
    }
}

struct LoftyHeader {
    properties: FileProperties,
    file_type: FileType,
}

impl RawHeader for LoftyHeader {
    fn track_length_secs(&self) -> f64 {
        self.properties.duration().as_secs_f64()
    }

    fn bitrate_kbps(&self) -> std::result::Result<u32, FieldError> {
        self.properties
            .audio_bitrate()
            .or_else(|| self.properties.overall_bitrate())
            .ok_or(FieldError::Unavailable("bitrate"))
    }

    fn sample_rate_hz(&self) -> std::result::Result<u32, FieldError> {
        self.properties
            .sample_rate()
            .ok_or(FieldError::Unavailable("sample rate"))
    }

    fn channels(&self) -> std::result::Result<String, FieldError> {
        match self.properties.channels() {
            Some(1) => Ok("Mono".to_string()),
            Some(2) => Ok("Stereo".to_string()),
            Some(n) => Ok(n.to_string()),
            None => Err(FieldError::Unavailable("channels")),
        }
    }

    fn format(&self) -> std::result::Result<String, FieldError> {
        match &self.file_type {
            FileType::Mpeg => Ok("MPEG Audio".to_string()),
            FileType::Custom(name) => Ok(name.to_string()),
            other => Ok(format!("{other:?}")),
        }
    }

    fn encoding_type(&self) -> std::result::Result<String, FieldError> {
        match &self.file_type {
            FileType::Mpeg => Ok("mp3".to_string()),
            FileType::Custom(_) => Err(FieldError::Unavailable("encoding type")),
            other => Ok(format!("{other:?}").to_lowercase()),
        }
    }
}
