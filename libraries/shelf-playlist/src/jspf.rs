//! JSPF (JSON Shareable Playlist Format) output

use crate::writer::{duration_ms, PlaylistFormat, PlaylistWriter};
use serde::Serialize;
use shelf_core::{Playlist, PlaylistEntry};
use std::io::{self, Write};

#[derive(Serialize)]
struct JspfDocument<'a> {
    playlist: JspfPlaylist<'a>,
}

#[derive(Serialize)]
struct JspfPlaylist<'a> {
    title: &'a str,
    track: Vec<JspfTrack>,
}

#[derive(Serialize)]
struct JspfTrack {
    location: String,
    title: String,
    /// Milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u64>,
}

impl From<&PlaylistEntry> for JspfTrack {
    fn from(entry: &PlaylistEntry) -> Self {
        Self {
            location: entry.location(),
            title: entry.display_title(),
            duration: duration_ms(entry.duration_secs()),
        }
    }
}

/// Writes JSPF documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JspfWriter;

impl PlaylistWriter for JspfWriter {
    fn format(&self) -> PlaylistFormat {
        PlaylistFormat::Jspf
    }

    fn render(&self, playlist: &Playlist, out: &mut dyn Write) -> io::Result<()> {
        let document = JspfDocument {
            playlist: JspfPlaylist {
                title: playlist.name().unwrap_or_default(),
                track: playlist.iter().map(JspfTrack::from).collect(),
            },
        };

        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)
    }
}
