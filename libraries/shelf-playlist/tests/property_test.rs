//! Property-based tests for playlist writers

use proptest::prelude::*;
use shelf_core::{AudioFile, AudioFormat, Metadata, Playlist};
use shelf_playlist::{JspfWriter, M3u8Writer, PlaylistWriter, XspfWriter, UNTITLED_TRACK};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
struct TestFile {
    path: PathBuf,
    metadata: Option<Metadata>,
    duration_secs: f64,
}

impl AudioFile for TestFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn mime_type(&self) -> Option<&str> {
        Some("audio/mpeg")
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    fn format(&self) -> AudioFormat {
        AudioFormat::Mp3
    }
}

fn arbitrary_file() -> impl Strategy<Value = Arc<dyn AudioFile>> {
    (
        "[a-z0-9 ]{1,12}",                                   // file stem
        proptest::option::of("[A-Za-z&<>'\" ]{0,16}"),       // title
        prop_oneof![Just(0.0f64), 0.01f64..7200.0],          // duration in seconds
    )
        .prop_map(|(stem, title, duration_secs)| {
            let metadata = title.map(|t| Metadata::builder().title(t).build().unwrap());
            Arc::new(TestFile {
                path: PathBuf::from(format!("/music/{stem}.mp3")),
                metadata,
                duration_secs,
            }) as Arc<dyn AudioFile>
        })
}

fn playlist_of(files: Vec<Arc<dyn AudioFile>>) -> Playlist {
    let mut playlist = Playlist::named("Property");
    for file in files {
        playlist.append(file);
    }
    playlist
}

fn render(writer: &dyn PlaylistWriter, playlist: &Playlist) -> String {
    let mut out = Vec::new();
    writer.render(playlist, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

proptest! {
    #[test]
    fn m3u8_has_two_lines_per_entry(files in prop::collection::vec(arbitrary_file(), 0..30)) {
        let playlist = playlist_of(files);
        let text = render(&M3u8Writer, &playlist);
        let lines: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines.len(), 1 + 2 * playlist.len());
        prop_assert_eq!(lines[0], "#EXTM3U");

        for (i, entry) in playlist.iter().enumerate() {
            let extinf = lines[1 + 2 * i];
            let secs = entry.duration_secs();
            let expected = if secs > 0.0 { secs.round() as i64 } else { -1 };
            let prefix = format!("#EXTINF:{expected},");
            prop_assert!(extinf.starts_with(&prefix), "{} vs {}", extinf, prefix);
            prop_assert!(!extinf[prefix.len()..].trim().is_empty());
            prop_assert_eq!(lines[2 + 2 * i], entry.location());
        }
    }

    #[test]
    fn unknown_durations_are_omitted(files in prop::collection::vec(arbitrary_file(), 0..30)) {
        let playlist = playlist_of(files);
        let known = playlist.iter().filter(|e| e.duration_secs() > 0.0).count();
        let unknown = playlist.len() - known;

        let xspf = render(&XspfWriter, &playlist);
        prop_assert_eq!(xspf.matches("<duration>").count(), known);

        let jspf: serde_json::Value = serde_json::from_str(&render(&JspfWriter, &playlist)).unwrap();
        let tracks = jspf["playlist"]["track"].as_array().unwrap();
        prop_assert_eq!(tracks.len(), playlist.len());
        prop_assert_eq!(tracks.iter().filter(|t| t.get("duration").is_some()).count(), known);

        let m3u8 = render(&M3u8Writer, &playlist);
        prop_assert_eq!(m3u8.matches("#EXTINF:-1,").count(), unknown);
    }

    #[test]
    fn untitled_entries_use_placeholder_in_m3u8(files in prop::collection::vec(arbitrary_file(), 1..20)) {
        let playlist = playlist_of(files);
        let untitled = playlist
            .iter()
            .filter(|e| e.file.metadata().and_then(Metadata::title).is_none())
            .count();

        let m3u8 = render(&M3u8Writer, &playlist);
        let placeholder = format!(",{UNTITLED_TRACK}\n");
        prop_assert!(m3u8.matches(&placeholder).count() >= untitled);
    }
}
