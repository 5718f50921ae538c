/// Playlist domain types
use crate::types::{AudioFile, FilterCriteria};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// One entry of a playlist
#[derive(Debug, Clone)]
pub struct PlaylistEntry {
    /// Shared library file
    pub file: Arc<dyn AudioFile>,

    /// Position in the playlist
    pub position: u32,

    /// When the entry was created
    pub added_at: DateTime<Utc>,
}

impl PlaylistEntry {
    /// Create a new entry
    pub fn new(file: Arc<dyn AudioFile>, position: u32) -> Self {
        Self {
            file,
            position,
            added_at: Utc::now(),
        }
    }

    /// Title to show for this entry
    ///
    /// Falls back to the file name when the metadata title is missing or blank.
    pub fn display_title(&self) -> String {
        self.file
            .metadata()
            .and_then(|m| m.title())
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map_or_else(|| self.file.file_name(), str::to_string)
    }

    /// File path as text
    pub fn location(&self) -> String {
        self.file.path().to_string_lossy().into_owned()
    }

    pub fn duration_secs(&self) -> f64 {
        self.file.duration_secs()
    }
}

/// Named, ordered sequence of entries
///
/// Insertion order is play order.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    name: Option<String>,
    entries: Vec<PlaylistEntry>,
}

impl Playlist {
    /// Create an unnamed, empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Append a file after the highest position in use
    ///
    /// An empty playlist starts at 1. Positions set through `push_entry`
    /// count, so an appended entry never repeats an existing position.
    pub fn append(&mut self, file: Arc<dyn AudioFile>) -> &PlaylistEntry {
        let position = self
            .entries
            .iter()
            .map(|entry| entry.position)
            .max()
            .map_or(1, |last| last.saturating_add(1));
        self.push_entry(PlaylistEntry::new(file, position))
    }

    /// Append a pre-built entry, keeping its position
    pub fn push_entry(&mut self, entry: PlaylistEntry) -> &PlaylistEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaylistEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of entry durations in seconds; unknown durations count as 0
    pub fn total_duration_secs(&self) -> f64 {
        self.entries.iter().map(PlaylistEntry::duration_secs).sum()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a PlaylistEntry;
    type IntoIter = std::slice::Iter<'a, PlaylistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Playlist regenerated from a library by a list of criteria
///
/// A file is kept only if every criterion matches, checked in registration
/// order. With no criteria every file is kept.
#[derive(Default)]
pub struct FilteredPlaylist {
    playlist: Playlist,
    criteria: Vec<Box<dyn FilterCriteria>>,
}

impl FilteredPlaylist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            playlist: Playlist::named(name),
            criteria: Vec::new(),
        }
    }

    /// Register a criterion, evaluated after those already registered
    pub fn add_criteria(&mut self, criteria: impl FilterCriteria + 'static) -> &mut Self {
        self.criteria.push(Box::new(criteria));
        self
    }

    pub fn criteria_count(&self) -> usize {
        self.criteria.len()
    }

    /// Whether a file passes every registered criterion
    pub fn matches(&self, file: &dyn AudioFile) -> bool {
        self.criteria.iter().all(|criteria| criteria.matches(file))
    }

    /// Replace all entries with the library files that match
    ///
    /// Positions are 0-based in library order. Applying the same criteria to
    /// the same library twice yields the same files in the same order.
    pub fn apply_criteria(&mut self, library: &[Arc<dyn AudioFile>]) {
        self.playlist.clear();

        let mut position = 0u32;
        for file in library {
            if self.matches(file.as_ref()) {
                self.playlist
                    .push_entry(PlaylistEntry::new(Arc::clone(file), position));
                position = position.saturating_add(1);
            }
        }

        tracing::debug!(
            "Filtered playlist kept {} of {} files ({} criteria)",
            self.playlist.len(),
            library.len(),
            self.criteria.len()
        );
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn into_playlist(self) -> Playlist {
        self.playlist
    }
}

impl fmt::Debug for FilteredPlaylist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredPlaylist")
            .field("playlist", &self.playlist)
            .field("criteria", &self.criteria.len())
            .finish()
    }
}
