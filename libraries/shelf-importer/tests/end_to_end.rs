//! End-to-end: scan a directory, extract metadata, export an M3U8 playlist
//!
//! A scripted tag reader stands in for real audio tags, so the rest of the
//! pipeline (local filesystem, MIME analysis, field mapping, writers) runs
//! unmodified.

use shelf_core::{AudioFile, MimeChecker};
use shelf_importer::{FileSystem, LibraryImporter, LocalFileSystem, ScanConfig};
use shelf_metadata::{
    FieldError, FieldKey, LibraryMetadataExtractor, RawField, RawHeader, RawTag, RawTags,
    TagReader,
};
use shelf_playlist::{PlaylistExporter, PlaylistFormat};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use test_helpers::init_tracing;

struct TitleTag(&'static str);

impl RawTag for TitleTag {
    fn field(&self, key: FieldKey) -> Result<Option<String>, FieldError> {
        Ok((key == FieldKey::Title).then(|| self.0.to_string()))
    }

    fn raw_fields(&self) -> Result<Vec<RawField>, FieldError> {
        Ok(vec![RawField {
            id: "TITLE".to_string(),
            description: "TITLE".to_string(),
            value: Ok(self.0.to_string()),
        }])
    }

    fn first_artwork(&self) -> Result<Option<shelf_core::CoverImage>, FieldError> {
        Ok(None)
    }
}

struct Length(f64);

impl RawHeader for Length {
    fn track_length_secs(&self) -> f64 {
        self.0
    }

    fn bitrate_kbps(&self) -> Result<u32, FieldError> {
        Ok(192)
    }

    fn sample_rate_hz(&self) -> Result<u32, FieldError> {
        Ok(44_100)
    }

    fn channels(&self) -> Result<String, FieldError> {
        Ok("Stereo".to_string())
    }

    fn format(&self) -> Result<String, FieldError> {
        Ok("MPEG Audio".to_string())
    }

    fn encoding_type(&self) -> Result<String, FieldError> {
        Ok("mp3".to_string())
    }
}

/// `a.mp3` is tagged "Song A" and lasts 180 s, anything else has no tags
struct ScriptedReader;

impl TagReader for ScriptedReader {
    fn read(&self, path: &Path) -> shelf_metadata::Result<RawTags> {
        if path.file_name().is_some_and(|name| name == "a.mp3") {
            Ok(RawTags {
                tag: Some(Box::new(TitleTag("Song A"))),
                header: Some(Box::new(Length(180.0))),
            })
        } else {
            Ok(RawTags::default())
        }
    }
}

#[test]
fn scan_extract_and_export_m3u8() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let library = dir.path().join("library");
    std::fs::create_dir(&library).unwrap();
    std::fs::write(library.join("a.mp3"), b"a").unwrap();
    std::fs::write(library.join("b.mp3"), b"b").unwrap();
    std::fs::write(library.join("notes.txt"), b"not audio").unwrap();

    let config = ScanConfig::default();
    let fs: Arc<dyn FileSystem> = Arc::new(LocalFileSystem::new(config.follow_symlinks));
    let analyzer = Arc::new(LibraryImporter::analyzer_for(&config, Arc::clone(&fs)));
    let extractor = Arc::new(LibraryMetadataExtractor::new(
        analyzer.clone() as Arc<dyn MimeChecker>,
        Arc::new(ScriptedReader),
    ));
    let importer = LibraryImporter::with_parts(config, fs, analyzer, extractor);

    let mut report = importer.import(&library).unwrap();
    assert_eq!(report.files.len(), 2);
    assert!(!report.has_failures());

    report.files.sort_by(|x, y| x.path().cmp(y.path()));
    let a = report.files[0].metadata().unwrap();
    let b = report.files[1].metadata().unwrap();
    assert_eq!(a.title(), Some("Song A"));
    assert_eq!(report.files[0].duration_secs(), 180.0);
    assert!(b.is_empty());
    assert_eq!(b.year(), 0);
    assert_eq!(b.duration_secs(), 0.0);

    let out = dir.path().join("library.m3u8");
    PlaylistExporter::new()
        .export(&report.library(), PlaylistFormat::M3u8, &out)
        .unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "#EXTM3U".to_string(),
            "#EXTINF:180,Song A".to_string(),
            report.files[0].path().display().to_string(),
            "#EXTINF:-1,Untitled track".to_string(),
            report.files[1].path().display().to_string(),
        ]
    );
}

// Directory names with markup characters are not portable
#[cfg(unix)]
#[test]
fn exported_xspf_parses_back() {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    init_tracing();
    let dir = TempDir::new().unwrap();
    let library = dir.path().join("R&B <mix>");
    std::fs::create_dir(&library).unwrap();
    std::fs::write(library.join("a.mp3"), b"a").unwrap();

    let config = ScanConfig::default();
    let fs: Arc<dyn FileSystem> = Arc::new(LocalFileSystem::default());
    let analyzer = Arc::new(LibraryImporter::analyzer_for(&config, Arc::clone(&fs)));
    let extractor = Arc::new(LibraryMetadataExtractor::new(
        analyzer.clone() as Arc<dyn MimeChecker>,
        Arc::new(ScriptedReader),
    ));
    let report = LibraryImporter::with_parts(config, fs, analyzer, extractor)
        .import(&library)
        .unwrap();

    let out = dir.path().join("mix.xspf");
    PlaylistExporter::new()
        .export(&report.library(), PlaylistFormat::Xspf, &out)
        .unwrap();
    let xml = std::fs::read_to_string(&out).unwrap();

    let mut reader = Reader::from_str(&xml);
    reader.config_mut().trim_text(true);
    let mut current = Vec::new();
    let mut location = String::new();
    let mut duration = String::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Eof => break,
            Event::Start(e) => current = e.name().as_ref().to_vec(),
            Event::End(_) => current.clear(),
            Event::Text(e) => {
                let text = e.unescape().unwrap();
                match current.as_slice() {
                    b"location" => location.push_str(&text),
                    b"duration" => duration.push_str(&text),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    assert_eq!(location, report.files[0].path().display().to_string());
    assert_eq!(duration, "180000");
}
