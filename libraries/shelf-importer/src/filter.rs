//! File acceptance rules for scanning

use crate::fs::FileSystem;
use shelf_core::MimeChecker;
use std::path::Path;
use std::sync::Arc;

/// Decides whether a scanned file belongs in the result
pub trait FileFilter: Send + Sync {
    fn accept(&self, path: &Path) -> bool;
}

impl<F> FileFilter for F
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn accept(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Accepts existing regular files that the MIME checker recognizes as
/// supported audio
pub struct AudioFileFilter {
    checker: Arc<dyn MimeChecker>,
    fs: Arc<dyn FileSystem>,
}

impl AudioFileFilter {
    pub fn new(checker: Arc<dyn MimeChecker>, fs: Arc<dyn FileSystem>) -> Self {
        Self { checker, fs }
    }
}

impl FileFilter for AudioFileFilter {
    fn accept(&self, path: &Path) -> bool {
        self.fs.exists(path) && self.fs.is_file(path) && self.checker.is_mp3(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;
    use crate::mime::{MimeDetector, MimeTypeAnalyzer};

    fn filter(fs: MemoryFileSystem) -> AudioFileFilter {
        let fs: Arc<dyn FileSystem> = Arc::new(fs);
        let analyzer = MimeTypeAnalyzer::new(MimeDetector::new(), Arc::clone(&fs));
        AudioFileFilter::new(Arc::new(analyzer), fs)
    }

    #[test]
    fn accepts_audio_files_only() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/music/a.mp3", Vec::new());
        fs.add_file("/music/b.wav", Vec::new());
        fs.add_file("/music/notes.txt", Vec::new());
        fs.add_dir("/music/folder.mp3");
        let filter = filter(fs);

        assert!(filter.accept(Path::new("/music/a.mp3")));
        assert!(filter.accept(Path::new("/music/b.wav")));
        assert!(!filter.accept(Path::new("/music/notes.txt")));
        assert!(!filter.accept(Path::new("/music/folder.mp3")));
        assert!(!filter.accept(Path::new("/music/missing.mp3")));
    }

    #[test]
    fn closures_are_filters() {
        let only_short = |path: &Path| path.as_os_str().len() < 10;

        assert!(only_short.accept(Path::new("/a.mp3")));
        assert!(!only_short.accept(Path::new("/music/long/name.mp3")));
    }
}
