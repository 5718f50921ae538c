//! Integration tests for the import workflow
//!
//! These run the real local filesystem, MIME analyzer and lofty-backed
//! metadata extractor against files written to a temp directory.

use shelf_core::{AudioFile, FilteredPlaylist, GenreCriteria, MimeChecker};
use shelf_importer::{
    FileSystem, ImportError, LibraryImporter, LocalFileSystem, MimeDetector, MimeTypeAnalyzer,
    ScanConfig,
};
use shelf_metadata::LibraryMetadataExtractor;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use test_helpers::init_tracing;

/// Write a file that has an audio extension but no real audio frames
fn create_fake_audio_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    writeln!(file, "FAKE AUDIO FILE")?;
    Ok(())
}

fn local_importer(config: ScanConfig) -> LibraryImporter {
    let fs: Arc<dyn FileSystem> = Arc::new(LocalFileSystem::new(config.follow_symlinks));
    let analyzer = Arc::new(LibraryImporter::analyzer_for(&config, Arc::clone(&fs)));
    let extractor = Arc::new(LibraryMetadataExtractor::with_lofty(
        analyzer.clone() as Arc<dyn MimeChecker>
    ));
    LibraryImporter::with_parts(config, fs, analyzer, extractor)
}

#[test]
fn imports_only_audio_files() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    create_fake_audio_file(&dir.path().join("a.mp3")).unwrap();
    create_fake_audio_file(&dir.path().join("nested/deeper/b.mp3")).unwrap();
    fs::write(dir.path().join("notes.txt"), "not music").unwrap();

    let report = local_importer(ScanConfig::default())
        .import(dir.path())
        .unwrap();

    let mut names: Vec<String> = report.files.iter().map(AudioFile::file_name).collect();
    names.sort();
    assert_eq!(names, vec!["a.mp3", "b.mp3"]);

    for file in &report.files {
        assert!(file.is_valid());
        assert_eq!(file.mime_type(), Some("audio/mpeg"));
        assert_eq!(file.audio_size(), "FAKE AUDIO FILE\n".len() as u64);
    }
}

#[test]
fn unreadable_tags_do_not_drop_files() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    create_fake_audio_file(&dir.path().join("one.mp3")).unwrap();
    create_fake_audio_file(&dir.path().join("two.mp3")).unwrap();

    let report = local_importer(ScanConfig::default())
        .import(dir.path())
        .unwrap();

    assert_eq!(report.files.len(), 2);
    // Every file either loaded metadata or has a recorded failure
    for file in &report.files {
        let failed = report.failures.iter().any(|f| f.path == file.path());
        assert!(file.has_metadata() != failed, "{}", file.path().display());
    }
}

#[test]
fn default_constructor_scans_local_files() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    create_fake_audio_file(&dir.path().join("song.mp3")).unwrap();

    let config = ScanConfig {
        load_metadata: false,
        ..ScanConfig::default()
    };
    let fs: Arc<dyn FileSystem> = Arc::new(LocalFileSystem::default());
    let checker = Arc::new(MimeTypeAnalyzer::new(MimeDetector::new(), fs));
    let importer = LibraryImporter::new(config, Arc::new(LibraryMetadataExtractor::with_lofty(checker)));

    let report = importer.import(dir.path()).unwrap();
    assert_eq!(report.files.len(), 1);
    assert!(!report.has_failures());
}

#[test]
fn missing_root_is_rejected() {
    init_tracing();
    let dir = TempDir::new().unwrap();

    let result = local_importer(ScanConfig::default()).import(&dir.path().join("absent"));
    assert!(matches!(result, Err(ImportError::InvalidArgument(_))));
}

#[test]
fn file_root_is_rejected() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.mp3");
    create_fake_audio_file(&file).unwrap();

    let result = local_importer(ScanConfig::default()).import(&file);
    assert!(matches!(result, Err(ImportError::InvalidArgument(_))));
}

#[test]
fn config_file_drives_the_import() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let music = dir.path().join("music");
    create_fake_audio_file(&music.join("a.mp3")).unwrap();

    let config_path = dir.path().join("shelf.toml");
    fs::write(&config_path, "loadMetadata = false\nmimeCacheCapacity = 8\n").unwrap();
    let config = ScanConfig::from_file(&config_path).unwrap();

    let importer = local_importer(config);
    let report = importer.import(&music).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.loaded_count(), 0);
    assert!(importer.analyzer().detector().cached_len() > 0);
}

#[test]
fn imported_library_feeds_filtered_playlists() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    create_fake_audio_file(&dir.path().join("a.mp3")).unwrap();

    let report = local_importer(ScanConfig::default())
        .import(dir.path())
        .unwrap();

    // Fake files carry no genre, so nothing matches
    let mut playlist = FilteredPlaylist::new();
    playlist.add_criteria(GenreCriteria::new("Jazz").unwrap());
    playlist.apply_criteria(&report.library());
    assert!(playlist.playlist().is_empty());
}

#[cfg(unix)]
#[test]
fn symlinked_files_follow_configuration() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    let target = outside.path().join("real.mp3");
    create_fake_audio_file(&target).unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("link.mp3")).unwrap();

    let skip = local_importer(ScanConfig::default())
        .import(dir.path())
        .unwrap();
    assert!(skip.files.is_empty());

    let follow = local_importer(ScanConfig {
        follow_symlinks: true,
        load_metadata: false,
        ..ScanConfig::default()
    })
    .import(dir.path())
    .unwrap();
    assert_eq!(follow.files.len(), 1);
}
