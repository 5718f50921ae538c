//! Shelf Playlist Output
//!
//! Writers for XSPF, JSPF and M3U8 playlists behind one `PlaylistWriter`
//! contract.
//!
//! - `PlaylistFormat` selects a writer, or maps a file extension to a format
//! - Each writer owns its full serialization and escaping
//! - `PlaylistExporter` turns a list of files into a written playlist
//!
//! Durations are milliseconds in XSPF and JSPF, where unknown durations are
//! left out, and rounded seconds in M3U8, where unknown is `-1`.
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf_core::Playlist;
//! use shelf_playlist::PlaylistFormat;
//! use std::path::Path;
//! # fn example(playlist: &Playlist) -> shelf_playlist::Result<()> {
//! let out = Path::new("/tmp/mix.xspf");
//! if let Some(format) = PlaylistFormat::from_path(out) {
//!     format.writer().write(playlist, out)?;
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod exporter;
mod jspf;
mod m3u8;
mod writer;
mod xspf;

#[cfg(test)]
mod test_support;

pub use error::{PlaylistWriteError, Result};
pub use exporter::{PlaylistExporter, GENERATED_PLAYLIST_NAME};
pub use jspf::JspfWriter;
pub use m3u8::{M3u8Writer, UNTITLED_TRACK};
pub use writer::{PlaylistFormat, PlaylistWriter};
pub use xspf::XspfWriter;
