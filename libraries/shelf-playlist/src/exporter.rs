//! One-shot playlist export

use crate::error::{PlaylistWriteError, Result};
use crate::writer::PlaylistFormat;
use shelf_core::{AudioFile, Playlist};
use std::path::Path;
use std::sync::Arc;

/// Name given to exported playlists
pub const GENERATED_PLAYLIST_NAME: &str = "Generated playlist";

/// Builds a playlist from a list of files and writes it in one step
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaylistExporter;

impl PlaylistExporter {
    pub fn new() -> Self {
        Self
    }

    /// Build the playlist `export` would write
    ///
    /// Entries keep the order of `files` with positions starting at 1.
    pub fn build(files: &[Arc<dyn AudioFile>]) -> Result<Playlist> {
        if files.is_empty() {
            return Err(PlaylistWriteError::invalid_argument(
                "cannot export a playlist without files",
            ));
        }

        let mut playlist = Playlist::named(GENERATED_PLAYLIST_NAME);
        for file in files {
            playlist.append(Arc::clone(file));
        }
        Ok(playlist)
    }

    /// Write `files` as a playlist in `format` to `out`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty file list, checked before `out` is
    /// touched; `Io` if writing fails
    pub fn export(
        &self,
        files: &[Arc<dyn AudioFile>],
        format: PlaylistFormat,
        out: &Path,
    ) -> Result<Playlist> {
        let playlist = Self::build(files)?;
        format.writer().write(&playlist, out)?;

        tracing::debug!(
            "Exported {} files as {} to {}",
            files.len(),
            format,
            out.display()
        );
        Ok(playlist)
    }
}
