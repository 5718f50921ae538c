/// Normalized audio metadata
use crate::error::{Result, ShelfError};
use crate::types::CoverImage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive and technical metadata of an audio file
///
/// Immutable once built. Unknown numeric fields hold `0`, unknown text
/// fields are `None`, and a missing or empty cover is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    genre: Option<String>,
    year: u32,
    track_number: u32,
    duration_secs: f64,
    bitrate_kbps: u32,
    sample_rate_hz: u32,
    channels: Option<String>,
    format: Option<String>,
    encoding_type: Option<String>,
    cover: Option<CoverImage>,
}

impl Metadata {
    /// Start building metadata
    pub fn builder() -> MetadataBuilder {
        MetadataBuilder::new()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// Release year, 0 if unknown
    pub fn year(&self) -> u32 {
        self.year
    }

    /// Track number, 0 if unknown
    pub fn track_number(&self) -> u32 {
        self.track_number
    }

    /// Duration in seconds, 0.0 if unknown
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Bitrate in kbps, 0 if unknown
    pub fn bitrate_kbps(&self) -> u32 {
        self.bitrate_kbps
    }

    /// Sample rate in Hz, 0 if unknown
    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    /// Channel descriptor (e.g. "Stereo", "2")
    pub fn channels(&self) -> Option<&str> {
        self.channels.as_deref()
    }

    /// Container format (e.g. "MPEG-1 Layer 3")
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Encoding type (e.g. "mp3")
    pub fn encoding_type(&self) -> Option<&str> {
        self.encoding_type.as_deref()
    }

    pub fn cover(&self) -> Option<&CoverImage> {
        self.cover.as_ref()
    }

    pub fn has_cover(&self) -> bool {
        self.cover.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Check if no descriptive field is known
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.genre.is_none()
            && self.year == 0
            && self.track_number == 0
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn text(value: Option<&str>) -> &str {
            value.unwrap_or("-")
        }

        writeln!(f, "Title: {}", text(self.title()))?;
        writeln!(f, "Artist: {}", text(self.artist()))?;
        writeln!(f, "Album: {}", text(self.album()))?;
        writeln!(f, "Genre: {}", text(self.genre()))?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Track: {}", self.track_number)?;
        writeln!(f, "Duration (s): {}", self.duration_secs)?;
        writeln!(
            f,
            "Cover: {}",
            self.cover
                .as_ref()
                .map_or_else(|| "No cover".to_string(), CoverImage::summary)
        )?;
        writeln!(f, "Bitrate (kbps): {}", self.bitrate_kbps)?;
        writeln!(f, "Sample rate (Hz): {}", self.sample_rate_hz)?;
        writeln!(f, "Channels: {}", text(self.channels()))?;
        writeln!(f, "Format: {}", text(self.format()))?;
        write!(f, "Encoding: {}", text(self.encoding_type()))
    }
}

/// Accumulates optional fields and emits a `Metadata`
///
/// Fields are public so an extractor can fill them from whatever it
/// manages to read; chained setters exist for literal construction.
#[derive(Debug, Clone, Default)]
pub struct MetadataBuilder {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub year: u32,
    pub track_number: u32,
    pub duration_secs: f64,
    pub bitrate_kbps: u32,
    pub sample_rate_hz: u32,
    pub channels: Option<String>,
    pub format: Option<String>,
    pub encoding_type: Option<String>,
    pub cover: Option<CoverImage>,
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    #[must_use]
    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn year(mut self, year: u32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn track_number(mut self, track_number: u32) -> Self {
        self.track_number = track_number;
        self
    }

    #[must_use]
    pub fn duration_secs(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    #[must_use]
    pub fn bitrate_kbps(mut self, bitrate_kbps: u32) -> Self {
        self.bitrate_kbps = bitrate_kbps;
        self
    }

    #[must_use]
    pub fn sample_rate_hz(mut self, sample_rate_hz: u32) -> Self {
        self.sample_rate_hz = sample_rate_hz;
        self
    }

    #[must_use]
    pub fn channels(mut self, channels: impl Into<String>) -> Self {
        self.channels = Some(channels.into());
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn encoding_type(mut self, encoding_type: impl Into<String>) -> Self {
        self.encoding_type = Some(encoding_type.into());
        self
    }

    #[must_use]
    pub fn cover(mut self, cover: CoverImage) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Consume the builder
    ///
    /// Text fields are trimmed and blank values dropped; an empty cover is
    /// dropped.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the duration is negative or not finite
    pub fn build(self) -> Result<Metadata> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(ShelfError::invalid_argument(format!(
                "duration must be a finite, non-negative number of seconds (got {})",
                self.duration_secs
            )));
        }

        Ok(Metadata {
            title: normalize_text(self.title),
            artist: normalize_text(self.artist),
            album: normalize_text(self.album),
            genre: normalize_text(self.genre),
            year: self.year,
            track_number: self.track_number,
            duration_secs: self.duration_secs,
            bitrate_kbps: self.bitrate_kbps,
            sample_rate_hz: self.sample_rate_hz,
            channels: normalize_text(self.channels),
            format: normalize_text(self.format),
            encoding_type: normalize_text(self.encoding_type),
            cover: self.cover.filter(|c| !c.is_empty()),
        })
    }
}

/// Trim a text value, mapping blank to `None`
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}
