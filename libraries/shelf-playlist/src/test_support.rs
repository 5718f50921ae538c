//! Library files for writer tests

use shelf_core::{AudioFile, AudioFormat, Metadata};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct Track {
    path: PathBuf,
    metadata: Option<Metadata>,
    duration_secs: f64,
}

impl AudioFile for Track {
    fn path(&self) -> &Path {
        &self.path
    }

    fn mime_type(&self) -> Option<&str> {
        Some("audio/mpeg")
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

/// A file at `path` with an optional title and the given duration
pub fn track(path: &str, title: Option<&str>, duration_secs: f64) -> Arc<dyn AudioFile> {
    let metadata = title.map(|title| {
        Metadata::builder()
            .title(title)
            .duration_secs(duration_secs.max(0.0))
            .build()
            .unwrap()
    });
    Arc::new(Track {
        path: PathBuf::from(path),
        metadata,
        duration_secs,
    })
}
