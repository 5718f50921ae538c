//! Library import: scan a tree and build audio file models

use crate::config::ScanConfig;
use crate::error::Result;
use crate::filter::AudioFileFilter;
use crate::fs::{FileSystem, LocalFileSystem};
use crate::mime::{MimeDetector, MimeTypeAnalyzer};
use crate::scanner::DirectoryScanner;
use shelf_core::{AudioFile, MetadataExtractor, Mp3File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A file that could not be fully imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of one import run
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Imported files in scan order, including those whose metadata failed
    pub files: Vec<Mp3File>,

    /// Per-file problems; none of them aborted the run
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    /// Number of files with metadata attached
    pub fn loaded_count(&self) -> usize {
        self.files.iter().filter(|f| f.has_metadata()).count()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Files as a shareable library for playlist building
    pub fn library(&self) -> Vec<Arc<dyn AudioFile>> {
        self.files
            .iter()
            .map(|file| Arc::new(file.clone()) as Arc<dyn AudioFile>)
            .collect()
    }
}

/// Imports a directory tree into `Mp3File` models
pub struct LibraryImporter {
    config: ScanConfig,
    fs: Arc<dyn FileSystem>,
    analyzer: Arc<MimeTypeAnalyzer>,
    extractor: Arc<dyn MetadataExtractor>,
    scanner: DirectoryScanner,
}

impl LibraryImporter {
    /// Create an importer on the local filesystem
    ///
    /// Builds its own MIME analyzer from `config`.
    pub fn new(config: ScanConfig, extractor: Arc<dyn MetadataExtractor>) -> Self {
        let fs: Arc<dyn FileSystem> = Arc::new(LocalFileSystem::new(config.follow_symlinks));
        let analyzer = Arc::new(Self::analyzer_for(&config, Arc::clone(&fs)));
        Self::with_parts(config, fs, analyzer, extractor)
    }

    /// Create an importer from explicit collaborators
    ///
    /// Pass the same analyzer to the metadata extractor so both share one
    /// detection cache.
    pub fn with_parts(
        config: ScanConfig,
        fs: Arc<dyn FileSystem>,
        analyzer: Arc<MimeTypeAnalyzer>,
        extractor: Arc<dyn MetadataExtractor>,
    ) -> Self {
        let filter = AudioFileFilter::new(analyzer.clone(), Arc::clone(&fs));
        let scanner = DirectoryScanner::new(Arc::new(filter), Arc::clone(&fs));

        Self {
            config,
            fs,
            analyzer,
            extractor,
            scanner,
        }
    }

    /// MIME analyzer configured from `config` on top of `fs`
    pub fn analyzer_for(config: &ScanConfig, fs: Arc<dyn FileSystem>) -> MimeTypeAnalyzer {
        MimeTypeAnalyzer::new(
            MimeDetector::new().with_cache(config.mime_cache_capacity),
            fs,
        )
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn analyzer(&self) -> Arc<MimeTypeAnalyzer> {
        Arc::clone(&self.analyzer)
    }

    /// Scan `root` and import every accepted file
    ///
    /// Per-file failures are recorded in the report and never abort the run.
    /// A file whose metadata fails to load is still imported, without
    /// metadata.
    ///
    /// # Errors
    ///
    /// Fails only if the scan itself fails (invalid root, unlistable directory)
    pub fn import(&self, root: &Path) -> Result<ImportReport> {
        // Files may have changed since the previous run
        self.analyzer.clear_cache();

        let paths = self.scanner.scan(root)?;
        tracing::info!("Importing {} files from {}", paths.len(), root.display());

        let mut report = ImportReport::default();
        for path in paths {
            if let Some(file) = self.import_file(&path, &mut report.failures) {
                report.files.push(file);
            }
        }

        tracing::info!(
            "Imported {} files from {} ({} with metadata, {} failures)",
            report.files.len(),
            root.display(),
            report.loaded_count(),
            report.failures.len()
        );

        Ok(report)
    }

    fn import_file(&self, path: &Path, failures: &mut Vec<ImportFailure>) -> Option<Mp3File> {
        let mut record = |message: String| {
            tracing::warn!("Import problem with {}: {}", path.display(), message);
            failures.push(ImportFailure {
                path: path.to_path_buf(),
                message,
            });
        };

        let mut file = match Mp3File::new(path) {
            Ok(file) => file,
            Err(e) => {
                record(e.to_string());
                return None;
            }
        };

        // Whole file on disk, tag bytes included
        match self.fs.file_size(path) {
            Ok(size) => file.set_audio_size(size),
            Err(e) => record(format!("cannot read file size: {e}")),
        }

        if self.config.validate_mime && !file.validate(self.analyzer.as_ref()) {
            record("not a supported audio file".to_string());
            return Some(file);
        }

        if self.config.load_metadata {
            if let Err(e) = file.load_metadata(self.extractor.as_ref()) {
                record(e.to_string());
            }
        }

        Some(file)
    }
}
