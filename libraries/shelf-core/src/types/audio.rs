/// Audio file model
use crate::error::{MetadataError, Result, ShelfError};
use crate::paths::normalize_path;
use crate::traits::{MetadataExtractor, MimeChecker};
use crate::types::metadata::{normalize_text, Metadata};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Logical audio format of a library file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
    Flac,
    Unknown,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Flac => "flac",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability shared by every audio file in a library
///
/// Playlists hold files as `Arc<dyn AudioFile>`, so implementations must be
/// shareable across threads.
pub trait AudioFile: fmt::Debug + Send + Sync {
    /// Absolute, normalized path
    fn path(&self) -> &Path;

    /// Final path component
    fn file_name(&self) -> String {
        self.path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Detected MIME type, `None` until validated or if detection failed
    fn mime_type(&self) -> Option<&str>;

    /// Attached metadata, `None` until loaded
    fn metadata(&self) -> Option<&Metadata>;

    /// Duration in seconds (0.0 if unknown)
    ///
    /// This copy is authoritative over the one inside `Metadata`.
    fn duration_secs(&self) -> f64;

    fn format(&self) -> AudioFormat;

    fn has_metadata(&self) -> bool {
        self.metadata().is_some()
    }

    fn has_known_duration(&self) -> bool {
        self.duration_secs() > 0.0
    }
}

/// An MP3 file in the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mp3File {
    path: PathBuf,
    mime_type: Option<String>,
    metadata: Option<Metadata>,
    duration_secs: f64,
    bitrate_kbps: u32,
    audio_size: u64,
    valid: bool,
}

impl Mp3File {
    /// Create a file model for `path`
    ///
    /// The path is made absolute and lexically normalized; it does not need
    /// to exist yet.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            path: normalize_path(path.as_ref())?,
            mime_type: None,
            metadata: None,
            duration_secs: 0.0,
            bitrate_kbps: 0,
            audio_size: 0,
            valid: false,
        })
    }

    /// Extract and attach metadata
    ///
    /// A positive duration or bitrate found in the metadata is mirrored into
    /// this file's own fields. On error the file is left unchanged.
    pub fn load_metadata(
        &mut self,
        extractor: &dyn MetadataExtractor,
    ) -> std::result::Result<(), MetadataError> {
        let metadata = extractor.extract(&self.path)?;

        if metadata.duration_secs() > 0.0 {
            self.duration_secs = metadata.duration_secs();
        }
        if metadata.bitrate_kbps() > 0 {
            self.bitrate_kbps = metadata.bitrate_kbps();
        }

        tracing::debug!(
            "Loaded metadata for {}: duration={}s bitrate={}kbps",
            self.path.display(),
            self.duration_secs,
            self.bitrate_kbps
        );

        self.metadata = Some(metadata);
        Ok(())
    }

    /// Detect the MIME type and record whether the file is a supported audio file
    ///
    /// Returns the new validity flag.
    pub fn validate(&mut self, checker: &dyn MimeChecker) -> bool {
        self.mime_type = normalize_text(checker.detect(&self.path));
        self.valid = checker.is_mp3(&self.path);

        if !self.valid {
            tracing::debug!(
                "{} is not a supported audio file (mime: {:?})",
                self.path.display(),
                self.mime_type
            );
        }

        self.valid
    }

    /// Set the duration in seconds
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a negative or non-finite duration
    pub fn set_duration_secs(&mut self, duration_secs: f64) -> Result<()> {
        if !duration_secs.is_finite() || duration_secs < 0.0 {
            return Err(ShelfError::invalid_argument(format!(
                "duration must be a finite, non-negative number of seconds (got {duration_secs})"
            )));
        }
        self.duration_secs = duration_secs;
        Ok(())
    }

    /// Bitrate in kbps (0 if unknown)
    pub fn bitrate_kbps(&self) -> u32 {
        self.bitrate_kbps
    }

    pub fn set_bitrate_kbps(&mut self, bitrate_kbps: u32) {
        self.bitrate_kbps = bitrate_kbps;
    }

    /// Audio size in bytes as recorded by the importer
    ///
    /// The importer stores the file's size on disk, so embedded tags and
    /// cover art count towards it. 0 until set.
    pub fn audio_size(&self) -> u64 {
        self.audio_size
    }

    pub fn set_audio_size(&mut self, audio_size: u64) {
        self.audio_size = audio_size;
    }

    /// Result of the last `validate` call, `false` if never validated
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl AudioFile for Mp3File {
    fn path(&self) -> &Path {
        &self.path
    }

    fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    fn format(&self) -> AudioFormat {
        AudioFormat::Mp3
    }
}
