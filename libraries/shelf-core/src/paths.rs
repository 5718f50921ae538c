//! Path normalization shared by the audio model and detection caches

use crate::error::{Result, ShelfError};
use std::path::{Component, Path, PathBuf};

/// Turn a path into an absolute, lexically normalized path.
///
/// Relative paths are resolved against the current working directory.
/// `.` components are dropped and `..` pops the previous normal component.
/// The filesystem is never consulted, so the path does not need to exist
/// and symlinks are not resolved.
pub fn normalize_path(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ShelfError::invalid_argument("path must not be empty"));
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Ok(normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pop past the root
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        let result = normalize_path(Path::new(""));
        assert!(matches!(result, Err(ShelfError::InvalidArgument(_))));
    }

    #[cfg(unix)]
    #[test]
    fn dot_segments_are_removed() {
        let path = normalize_path(Path::new("/music/./rock/../jazz/song.mp3")).unwrap();
        assert_eq!(path, PathBuf::from("/music/jazz/song.mp3"));
    }

    #[cfg(unix)]
    #[test]
    fn parent_of_root_stays_at_root() {
        let path = normalize_path(Path::new("/../../song.mp3")).unwrap();
        assert_eq!(path, PathBuf::from("/song.mp3"));
    }

    #[test]
    fn relative_path_becomes_absolute() {
        let path = normalize_path(Path::new("song.mp3")).unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("song.mp3"));
    }
}
