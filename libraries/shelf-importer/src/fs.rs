//! Filesystem port
//!
//! Scanning and MIME checks only touch the filesystem through `FileSystem`,
//! so they run unchanged against the in-memory double used in tests.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Read-only view of a filesystem
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a regular file
    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Immediate children of a directory
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Size of a file in bytes
    fn file_size(&self, path: &Path) -> io::Result<u64>;

    /// Absolute path with every symbolic link resolved
    ///
    /// Two paths naming the same directory resolve to the same value.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// `FileSystem` backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem {
    /// Whether symbolic links are followed
    follow_symlinks: bool,
}

impl LocalFileSystem {
    /// Create a local filesystem view
    ///
    /// With `follow_symlinks` off, a symbolic link is neither a file nor a
    /// directory, so scans skip it.
    pub fn new(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }

    fn metadata(&self, path: &Path) -> io::Result<std::fs::Metadata> {
        if self.follow_symlinks {
            std::fs::metadata(path)
        } else {
            std::fs::symlink_metadata(path)
        }
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.metadata(path).is_ok_and(|m| m.is_file())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(self.metadata(path)?.len())
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir,
}

#[derive(Debug, Default)]
struct MemoryState {
    nodes: BTreeMap<PathBuf, Node>,
    unreadable: BTreeSet<PathBuf>,
}

/// In-memory `FileSystem`
///
/// Adding a file or directory creates its missing ancestors. Listings come
/// back in path order.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: Mutex<MemoryState>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn add_ancestors(state: &mut MemoryState, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            state.nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    /// Add a file with the given contents
    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let path = path.into();
        let mut state = self.state();
        Self::add_ancestors(&mut state, &path);
        state.nodes.insert(path, Node::File(contents.into()));
    }

    /// Add an empty directory
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut state = self.state();
        Self::add_ancestors(&mut state, &path);
        state.nodes.insert(path, Node::Dir);
    }

    /// Make listing `path` fail with `PermissionDenied`
    pub fn deny_listing(&self, path: impl Into<PathBuf>) {
        self.state().unreadable.insert(path.into());
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.state().nodes.contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.state().nodes.get(path), Some(Node::File(_)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.state().nodes.get(path), Some(Node::Dir))
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self.state().nodes.get(path) {
            Some(Node::File(bytes)) => Ok(bytes.clone()),
            Some(Node::Dir) => Err(io::Error::other(format!(
                "{} is a directory",
                path.display()
            ))),
            None => Err(not_found(path)),
        }
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let state = self.state();
        if state.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot list {}", path.display()),
            ));
        }
        match state.nodes.get(path) {
            Some(Node::Dir) => Ok(state
                .nodes
                .keys()
                .filter(|child| child.parent() == Some(path))
                .cloned()
                .collect()),
            Some(Node::File(_)) => Err(io::Error::other(format!(
                "{} is not a directory",
                path.display()
            ))),
            None => Err(not_found(path)),
        }
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        match self.state().nodes.get(path) {
            Some(Node::File(bytes)) => Ok(bytes.len() as u64),
            Some(Node::Dir) => Ok(0),
            None => Err(not_found(path)),
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        // No links in memory: every stored path is already canonical
        if self.exists(path) {
            Ok(path.to_path_buf())
        } else {
            Err(not_found(path))
        }
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} does not exist", path.display()),
    )
}
