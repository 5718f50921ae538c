//! XSPF (XML Shareable Playlist Format) output

use crate::writer::{duration_ms, PlaylistFormat, PlaylistWriter};
use quick_xml::escape::escape;
use shelf_core::{Playlist, PlaylistEntry};
use std::io::{self, Write};

/// Writes XSPF version 1 documents
#[derive(Debug, Clone, Copy, Default)]
pub struct XspfWriter;

impl XspfWriter {
    fn render_track(entry: &PlaylistEntry, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "    <track>")?;

        let location = entry.location();
        if !location.trim().is_empty() {
            writeln!(out, "      <location>{}</location>", escape(location.as_str()))?;
        }

        let title = entry.display_title();
        if !title.trim().is_empty() {
            writeln!(out, "      <title>{}</title>", escape(title.as_str()))?;
        }

        if let Some(ms) = duration_ms(entry.duration_secs()) {
            writeln!(out, "      <duration>{ms}</duration>")?;
        }

        writeln!(out, "    </track>")
    }
}

impl PlaylistWriter for XspfWriter {
    fn format(&self) -> PlaylistFormat {
        PlaylistFormat::Xspf
    }

    fn render(&self, playlist: &Playlist, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(out, r#"<playlist version="1" xmlns="http://xspf.org/ns/0/">"#)?;
        writeln!(
            out,
            "  <title>{}</title>",
            escape(playlist.name().unwrap_or_default())
        )?;
        writeln!(out, "  <trackList>")?;

        for entry in playlist {
            Self::render_track(entry, out)?;
        }

        writeln!(out, "  </trackList>")?;
        writeln!(out, "</playlist>")
    }
}
