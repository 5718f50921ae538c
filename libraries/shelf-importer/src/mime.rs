//! MIME type detection
//!
//! Detection walks an ordered list of strategies and keeps the first answer.
//! A strategy that fails simply has no answer.

use crate::fs::FileSystem;
use lru::LruCache;
use shelf_core::{normalize_path, MimeChecker};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// MIME types accepted as supported audio, compared case-insensitively
pub const SUPPORTED_AUDIO_MIME_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp3",
    "audio/flac",
    "audio/x-flac",
    "audio/wav",
    "audio/x-wav",
];

/// One way of guessing a file's MIME type
pub trait DetectionStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// MIME type of `path`, `None` if this strategy cannot tell
    fn detect(&self, path: &Path) -> Option<String>;
}

/// Platform content-type database, via `mime_guess`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl DetectionStrategy for SystemProbe {
    fn name(&self) -> &'static str {
        "system"
    }

    fn detect(&self, path: &Path) -> Option<String> {
        mime_guess::from_path(path).first().map(|m| m.to_string())
    }
}

/// Fixed table of audio extensions
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionTable;

impl ExtensionTable {
    const TABLE: &'static [(&'static str, &'static str)] = &[
        ("mp3", "audio/mpeg"),
        ("flac", "audio/flac"),
        ("wav", "audio/wav"),
    ];
}

impl DetectionStrategy for ExtensionTable {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn detect(&self, path: &Path) -> Option<String> {
        let ext = path.extension()?.to_str()?;
        Self::TABLE
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map(|(_, mime)| (*mime).to_string())
    }
}

/// Ordered chain of detection strategies with an optional LRU cache
///
/// The cache is keyed by normalized absolute path and is only invalidated by
/// `clear_cache`.
pub struct MimeDetector {
    strategies: Vec<Box<dyn DetectionStrategy>>,
    cache: Option<Mutex<LruCache<PathBuf, Option<String>>>>,
}

impl MimeDetector {
    /// Detector with the default chain: system probe, then extension table
    pub fn new() -> Self {
        Self::with_strategies(vec![Box::new(SystemProbe), Box::new(ExtensionTable)])
    }

    /// Detector with a custom chain, evaluated in order
    pub fn with_strategies(strategies: Vec<Box<dyn DetectionStrategy>>) -> Self {
        Self {
            strategies,
            cache: None,
        }
    }

    /// Enable caching of up to `capacity` answers (0 disables the cache)
    #[must_use]
    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.cache = NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap)));
        self
    }

    /// Detect the MIME type of a file
    pub fn detect(&self, path: &Path) -> Option<String> {
        let Some(cache) = &self.cache else {
            return self.detect_uncached(path);
        };
        let Ok(key) = normalize_path(path) else {
            return self.detect_uncached(path);
        };

        if let Some(hit) = cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return hit.clone();
        }

        let mime = self.detect_uncached(path);
        cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(key, mime.clone());
        mime
    }

    fn detect_uncached(&self, path: &Path) -> Option<String> {
        for strategy in &self.strategies {
            if let Some(mime) = strategy.detect(path) {
                tracing::trace!(
                    "{} detected as {} by {} strategy",
                    path.display(),
                    mime,
                    strategy.name()
                );
                return Some(mime);
            }
        }
        None
    }

    /// Forget every cached answer
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }

    /// Number of cached answers
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| {
            cache.lock().unwrap_or_else(PoisonError::into_inner).len()
        })
    }
}

impl Default for MimeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MimeDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("MimeDetector")
            .field("strategies", &names)
            .field("cached", &self.cached_len())
            .finish()
    }
}

/// `MimeChecker` built on a `MimeDetector` and the filesystem port
pub struct MimeTypeAnalyzer {
    detector: MimeDetector,
    fs: Arc<dyn FileSystem>,
}

impl MimeTypeAnalyzer {
    pub fn new(detector: MimeDetector, fs: Arc<dyn FileSystem>) -> Self {
        Self { detector, fs }
    }

    /// Whether a MIME type is one of the supported audio types
    pub fn is_supported_mime(mime: &str) -> bool {
        SUPPORTED_AUDIO_MIME_TYPES
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(mime.trim()))
    }

    pub fn detector(&self) -> &MimeDetector {
        &self.detector
    }

    /// Forget cached detections
    pub fn clear_cache(&self) {
        self.detector.clear_cache();
    }
}

impl std::fmt::Debug for MimeTypeAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MimeTypeAnalyzer")
            .field("detector", &self.detector)
            .finish_non_exhaustive()
    }
}

impl MimeChecker for MimeTypeAnalyzer {
    fn detect(&self, path: &Path) -> Option<String> {
        self.detector.detect(path)
    }

    /// An existing regular file whose MIME type is supported, or whose name
    /// ends in `.mp3`
    fn is_mp3(&self, path: &Path) -> bool {
        if !self.fs.exists(path) || !self.fs.is_file(path) {
            return false;
        }

        if self
            .detect(path)
            .is_some_and(|mime| Self::is_supported_mime(&mime))
        {
            return true;
        }

        // Only .mp3 is accepted by name, FLAC and WAV need a detected type
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.to_ascii_lowercase().ends_with(".mp3"))
    }
}
