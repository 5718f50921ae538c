//! Directory scanning for audio files

use crate::error::{ImportError, Result};
use crate::filter::FileFilter;
use crate::fs::FileSystem;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Depth-first scanner over the filesystem port
///
/// Traversal uses an explicit stack, so deep trees cannot overflow the call
/// stack. Entries that are neither regular files nor directories are skipped.
/// Each directory is listed once, keyed by its canonical path, so followed
/// symbolic links cannot make the scan loop or report a file twice.
pub struct DirectoryScanner {
    filter: Arc<dyn FileFilter>,
    fs: Arc<dyn FileSystem>,
}

impl DirectoryScanner {
    /// Create a scanner keeping files accepted by `filter`
    pub fn new(filter: Arc<dyn FileFilter>, fs: Arc<dyn FileSystem>) -> Self {
        Self { filter, fs }
    }

    /// Scan a directory tree
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to scan. A root that is a symbolic link to a
    ///   directory is accepted even when links are not followed below it.
    ///
    /// # Returns
    ///
    /// Accepted file paths in traversal order
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `root` does not exist or is not a directory, and
    /// `Io` if a directory cannot be listed
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !self.fs.exists(root) {
            return Err(ImportError::invalid_argument(format!(
                "{} does not exist",
                root.display()
            )));
        }

        if !self.is_root_dir(root) {
            return Err(ImportError::invalid_argument(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut accepted = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![root.to_path_buf()];

        while let Some(dir) = stack.pop() {
            let key = self.fs.canonicalize(&dir).unwrap_or_else(|_| dir.clone());
            if !visited.insert(key) {
                tracing::trace!("Already scanned {}", dir.display());
                continue;
            }
            tracing::debug!("Scanning directory {}", dir.display());

            let children = self
                .fs
                .list_dir(&dir)
                .map_err(|e| ImportError::io(&dir, e))?;

            for child in children {
                if self.fs.is_dir(&child) {
                    stack.push(child);
                } else if self.fs.is_file(&child) {
                    if self.filter.accept(&child) {
                        accepted.push(child);
                    }
                } else {
                    tracing::trace!("Skipping special entry {}", child.display());
                }
            }
        }

        tracing::info!(
            "Scanned {}: {} files accepted in {} directories",
            root.display(),
            accepted.len(),
            visited.len()
        );

        Ok(accepted)
    }

    /// Whether `root` is a directory, resolving the root itself if it is a link
    fn is_root_dir(&self, root: &Path) -> bool {
        self.fs.is_dir(root)
            || self
                .fs
                .canonicalize(root)
                .is_ok_and(|resolved| self.fs.is_dir(&resolved))
    }
}
