//! Playlist writer contract and format dispatch

use crate::error::{PlaylistWriteError, Result};
use crate::{JspfWriter, M3u8Writer, XspfWriter};
use serde::{Deserialize, Serialize};
use shelf_core::Playlist;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Serializes a playlist in one output format
pub trait PlaylistWriter: Send + Sync {
    /// The format this writer produces
    fn format(&self) -> PlaylistFormat;

    /// Serialize `playlist` into `out`
    fn render(&self, playlist: &Playlist, out: &mut dyn Write) -> io::Result<()>;

    /// Write `playlist` to the file at `path`, replacing any existing file
    ///
    /// The write is not atomic: a failure can leave a partial file behind.
    /// An empty playlist still produces a valid file.
    fn write(&self, playlist: &Playlist, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| PlaylistWriteError::io(path, e))?;
        let mut out = BufWriter::new(file);

        self.render(playlist, &mut out)
            .and_then(|()| out.flush())
            .map_err(|e| PlaylistWriteError::io(path, e))?;

        tracing::info!(
            "Wrote {} playlist with {} entries to {}",
            self.format(),
            playlist.len(),
            path.display()
        );
        Ok(())
    }
}

/// Supported playlist output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistFormat {
    /// XML Shareable Playlist Format
    Xspf,
    /// JSON Shareable Playlist Format
    Jspf,
    /// UTF-8 extended M3U
    M3u8,
}

impl PlaylistFormat {
    pub const ALL: [Self; 3] = [Self::Xspf, Self::Jspf, Self::M3u8];

    /// Writer for this format
    pub fn writer(self) -> Box<dyn PlaylistWriter> {
        match self {
            Self::Xspf => Box::new(XspfWriter),
            Self::Jspf => Box::new(JspfWriter),
            Self::M3u8 => Box::new(M3u8Writer),
        }
    }

    /// Format matching the extension of `path`, if any
    ///
    /// `.m3u` is treated as M3U8.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xspf" => Some(Self::Xspf),
            "jspf" => Some(Self::Jspf),
            "m3u8" | "m3u" => Some(Self::M3u8),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Xspf => "xspf",
            Self::Jspf => "jspf",
            Self::M3u8 => "m3u8",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Xspf => "application/xspf+xml",
            Self::Jspf => "application/json",
            Self::M3u8 => "application/vnd.apple.mpegurl",
        }
    }
}

impl fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xspf => "XSPF",
            Self::Jspf => "JSPF",
            Self::M3u8 => "M3U8",
        };
        f.write_str(name)
    }
}

/// Entry duration in whole milliseconds, `None` when unknown
pub(crate) fn duration_ms(duration_secs: f64) -> Option<u64> {
    if duration_secs.is_finite() && duration_secs > 0.0 {
        Some((duration_secs * 1000.0) as u64).filter(|ms| *ms > 0)
    } else {
        None
    }
}
