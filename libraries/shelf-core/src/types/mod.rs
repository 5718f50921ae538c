mod audio;
mod cover;
mod criteria;
mod metadata;
mod playlist;
mod tags;

pub use audio::{AudioFile, AudioFormat, Mp3File};
pub use cover::CoverImage;
pub use criteria::{
    AlbumCriteria, ArtistCriteria, DurationRangeCriteria, FilterCriteria, GenreCriteria,
    YearRangeCriteria,
};
pub use metadata::{normalize_text, Metadata, MetadataBuilder};
pub use playlist::{FilteredPlaylist, Playlist, PlaylistEntry};
pub use tags::{Id3Tag, Id3TagSet};
