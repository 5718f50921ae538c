/// Filter criteria for derived playlists
use crate::error::{Result, ShelfError};
use crate::types::{AudioFile, Metadata};

/// A predicate over library files
///
/// Criteria fail closed: a file without metadata, or without the field a
/// criterion inspects, does not match.
pub trait FilterCriteria: Send + Sync {
    fn matches(&self, file: &dyn AudioFile) -> bool;
}

impl<F> FilterCriteria for F
where
    F: Fn(&dyn AudioFile) -> bool + Send + Sync,
{
    fn matches(&self, file: &dyn AudioFile) -> bool {
        self(file)
    }
}

/// Trimmed, case-insensitive text target
#[derive(Debug, Clone, PartialEq, Eq)]
struct TextTarget(String);

impl TextTarget {
    fn new(target: impl Into<String>, what: &str) -> Result<Self> {
        let target = target.into();
        let trimmed = target.trim();
        if trimmed.is_empty() {
            return Err(ShelfError::invalid_argument(format!(
                "{what} filter target must not be blank"
            )));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    fn matches(&self, value: Option<&str>) -> bool {
        value.is_some_and(|v| v.trim().to_lowercase() == self.0)
    }
}

/// Matches files whose artist equals the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistCriteria {
    target: TextTarget,
}

impl ArtistCriteria {
    /// # Errors
    /// Returns `InvalidArgument` for a blank artist
    pub fn new(artist: impl Into<String>) -> Result<Self> {
        Ok(Self {
            target: TextTarget::new(artist, "artist")?,
        })
    }
}

impl FilterCriteria for ArtistCriteria {
    fn matches(&self, file: &dyn AudioFile) -> bool {
        self.target.matches(file.metadata().and_then(Metadata::artist))
    }
}

/// Matches files whose genre equals the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCriteria {
    target: TextTarget,
}

impl GenreCriteria {
    /// # Errors
    /// Returns `InvalidArgument` for a blank genre
    pub fn new(genre: impl Into<String>) -> Result<Self> {
        Ok(Self {
            target: TextTarget::new(genre, "genre")?,
        })
    }
}

impl FilterCriteria for GenreCriteria {
    fn matches(&self, file: &dyn AudioFile) -> bool {
        self.target.matches(file.metadata().and_then(Metadata::genre))
    }
}

/// Matches files whose album equals the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumCriteria {
    target: TextTarget,
}

impl AlbumCriteria {
    /// # Errors
    /// Returns `InvalidArgument` for a blank album
    pub fn new(album: impl Into<String>) -> Result<Self> {
        Ok(Self {
            target: TextTarget::new(album, "album")?,
        })
    }
}

impl FilterCriteria for AlbumCriteria {
    fn matches(&self, file: &dyn AudioFile) -> bool {
        self.target.matches(file.metadata().and_then(Metadata::album))
    }
}

/// Matches files released within an inclusive year range
///
/// Year 0 means unknown and never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRangeCriteria {
    min: u32,
    max: u32,
}

impl YearRangeCriteria {
    /// # Errors
    /// Returns `InvalidArgument` if `min > max`
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(ShelfError::invalid_argument(format!(
                "year range is inverted: {min} > {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl FilterCriteria for YearRangeCriteria {
    fn matches(&self, file: &dyn AudioFile) -> bool {
        file.metadata()
            .map(Metadata::year)
            .is_some_and(|year| year != 0 && (self.min..=self.max).contains(&year))
    }
}

/// Matches files whose duration lies within an inclusive range of seconds
///
/// Uses the file's own duration; unknown durations never match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationRangeCriteria {
    min_secs: f64,
    max_secs: f64,
}

impl DurationRangeCriteria {
    /// # Errors
    /// Returns `InvalidArgument` for negative, non-finite or inverted bounds
    pub fn new(min_secs: f64, max_secs: f64) -> Result<Self> {
        let valid_bound = |v: f64| v.is_finite() && v >= 0.0;
        if !valid_bound(min_secs) || !valid_bound(max_secs) || min_secs > max_secs {
            return Err(ShelfError::invalid_argument(format!(
                "invalid duration range: {min_secs}..={max_secs}"
            )));
        }
        Ok(Self { min_secs, max_secs })
    }
}

impl FilterCriteria for DurationRangeCriteria {
    fn matches(&self, file: &dyn AudioFile) -> bool {
        let duration = file.duration_secs();
        duration > 0.0 && duration >= self.min_secs && duration <= self.max_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mp3File;

    fn file_with(metadata: Metadata) -> Mp3File {
        let mut file = Mp3File::new("/music/track.mp3").unwrap();

        let mut extractor = crate::traits::MockMetadataExtractor::new();
        extractor
            .expect_extract()
            .returning(move |_| Ok(metadata.clone()));
        file.load_metadata(&extractor).unwrap();
        file
    }

    #[test]
    fn artist_matches_trimmed_case_insensitive() {
        let criteria = ArtistCriteria::new("  the band ").unwrap();

        let file = file_with(Metadata::builder().artist("The Band").build().unwrap());
        assert!(criteria.matches(&file));

        let file = file_with(Metadata::builder().artist("Other").build().unwrap());
        assert!(!criteria.matches(&file));
    }

    #[test]
    fn missing_metadata_fails_closed() {
        let file = Mp3File::new("/music/bare.mp3").unwrap();

        assert!(!ArtistCriteria::new("x").unwrap().matches(&file));
        assert!(!GenreCriteria::new("x").unwrap().matches(&file));
        assert!(!AlbumCriteria::new("x").unwrap().matches(&file));
        assert!(!YearRangeCriteria::new(0, 3000).unwrap().matches(&file));
    }

    #[test]
    fn blank_targets_are_rejected() {
        assert!(ArtistCriteria::new("  ").is_err());
        assert!(GenreCriteria::new("").is_err());
        assert!(AlbumCriteria::new("\t").is_err());
    }

    #[test]
    fn genre_and_album_compare_their_own_field() {
        let file = file_with(
            Metadata::builder()
                .genre("Jazz")
                .album("Blue Train")
                .build()
                .unwrap(),
        );

        assert!(GenreCriteria::new("JAZZ").unwrap().matches(&file));
        assert!(AlbumCriteria::new("blue train").unwrap().matches(&file));
        assert!(!GenreCriteria::new("Blue Train").unwrap().matches(&file));
    }

    #[test]
    fn year_range_is_inclusive_and_skips_unknown() {
        let criteria = YearRangeCriteria::new(2000, 2010).unwrap();

        let matched: Vec<u32> = [0, 1999, 2000, 2010, 2025]
            .into_iter()
            .filter(|&year| {
                criteria.matches(&file_with(Metadata::builder().year(year).build().unwrap()))
            })
            .collect();

        assert_eq!(matched, vec![2000, 2010]);
    }

    #[test]
    fn inverted_year_range_is_rejected() {
        assert!(matches!(
            YearRangeCriteria::new(2010, 2000),
            Err(ShelfError::InvalidArgument(_))
        ));
    }

    #[test]
    fn duration_range_uses_file_duration() {
        let criteria = DurationRangeCriteria::new(60.0, 300.0).unwrap();

        let mut file = Mp3File::new("/music/a.mp3").unwrap();
        assert!(!criteria.matches(&file));

        file.set_duration_secs(60.0).unwrap();
        assert!(criteria.matches(&file));

        file.set_duration_secs(300.5).unwrap();
        assert!(!criteria.matches(&file));
    }

    #[test]
    fn invalid_duration_range_is_rejected() {
        assert!(DurationRangeCriteria::new(10.0, 5.0).is_err());
        assert!(DurationRangeCriteria::new(-1.0, 5.0).is_err());
        assert!(DurationRangeCriteria::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn closures_are_criteria() {
        let has_metadata = |file: &dyn AudioFile| file.has_metadata();
        let file = Mp3File::new("/music/a.mp3").unwrap();

        assert!(!has_metadata.matches(&file));
    }
}
