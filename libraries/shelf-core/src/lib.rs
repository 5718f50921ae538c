//! Shelf Core
//!
//! Domain types, traits, and error handling shared by the Shelf libraries.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Metadata`, `CoverImage`, `Mp3File`, `Playlist`, filter criteria
//! - **Core Traits**: `MetadataExtractor`, `MimeChecker`, `AudioFile`, `FilterCriteria`
//! - **Error Handling**: Unified `ShelfError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use shelf_core::types::{ArtistCriteria, AudioFile, FilteredPlaylist, Mp3File};
//! use std::sync::Arc;
//!
//! let library: Vec<Arc<dyn AudioFile>> = vec![Arc::new(Mp3File::new("/music/song.mp3").unwrap())];
//!
//! let mut playlist = FilteredPlaylist::named("Favourites");
//! playlist.add_criteria(ArtistCriteria::new("Someone").unwrap());
//! playlist.apply_criteria(&library);
//!
//! // No metadata loaded, so nothing matches
//! assert!(playlist.playlist().is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod paths;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{BoxError, MetadataError, Result, ShelfError};
pub use paths::normalize_path;
pub use traits::{MetadataExtractor, MimeChecker};

pub use types::{
    // Audio files
    AudioFile, AudioFormat, Mp3File,
    // Metadata
    CoverImage, Id3Tag, Id3TagSet, Metadata, MetadataBuilder,
    // Playlists
    FilteredPlaylist, Playlist, PlaylistEntry,
    // Criteria
    AlbumCriteria, ArtistCriteria, DurationRangeCriteria, FilterCriteria, GenreCriteria,
    YearRangeCriteria,
};
