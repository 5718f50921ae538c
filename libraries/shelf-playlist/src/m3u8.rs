//! Extended M3U (UTF-8) output

use crate::writer::{PlaylistFormat, PlaylistWriter};
use shelf_core::{Playlist, PlaylistEntry};
use std::io::{self, Write};

/// Title written for entries without a metadata title
pub const UNTITLED_TRACK: &str = "Untitled track";

/// Writes `#EXTM3U` playlists
///
/// Each entry is an `#EXTINF:<seconds>,<title>` line followed by the raw
/// location. Unknown durations are written as `-1`. Nothing is escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct M3u8Writer;

impl M3u8Writer {
    /// Rounded seconds, or -1 when the duration is unknown
    fn extinf_seconds(duration_secs: f64) -> i64 {
        if duration_secs.is_finite() && duration_secs > 0.0 {
            duration_secs.round() as i64
        } else {
            -1
        }
    }

    fn title(entry: &PlaylistEntry) -> &str {
        entry
            .file
            .metadata()
            .and_then(|m| m.title())
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(UNTITLED_TRACK)
    }
}

impl PlaylistWriter for M3u8Writer {
    fn format(&self) -> PlaylistFormat {
        PlaylistFormat::M3u8
    }

    fn render(&self, playlist: &Playlist, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "#EXTM3U")?;

        for entry in playlist {
            writeln!(
                out,
                "#EXTINF:{},{}",
                Self::extinf_seconds(entry.duration_secs()),
                Self::title(entry)
            )?;
            writeln!(out, "{}", entry.location())?;
        }

        Ok(())
    }
}
