//! Shelf Library Importer
//!
//! Finds audio files in a directory tree and turns them into `Mp3File`
//! models with metadata attached.
//!
//! # Architecture
//!
//! - `fs`: Filesystem port with local and in-memory implementations
//! - `mime`: MIME detection chain, optional LRU cache, audio acceptance rules
//! - `filter`: File acceptance for scans
//! - `scanner`: Iterative depth-first directory scanning
//! - `config`: Import settings loaded from TOML/JSON/YAML
//! - `importer`: Orchestration of a full import run
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf_core::MetadataExtractor;
//! use shelf_importer::{LibraryImporter, ScanConfig};
//! use std::path::Path;
//! use std::sync::Arc;
//! # fn example(extractor: Arc<dyn MetadataExtractor>) -> shelf_importer::Result<()> {
//! let importer = LibraryImporter::new(ScanConfig::default(), extractor);
//! let report = importer.import(Path::new("/music"))?;
//! println!("{} files, {} failures", report.files.len(), report.failures.len());
//! # Ok(())
//! # }
//! ```

mod error;

pub mod config;
pub mod filter;
pub mod fs;
pub mod importer;
pub mod mime;
pub mod scanner;

pub use config::ScanConfig;
pub use error::{ImportError, Result};
pub use filter::{AudioFileFilter, FileFilter};
pub use fs::{FileSystem, LocalFileSystem, MemoryFileSystem};
pub use importer::{ImportFailure, ImportReport, LibraryImporter};
pub use mime::{
    DetectionStrategy, ExtensionTable, MimeDetector, MimeTypeAnalyzer, SystemProbe,
    SUPPORTED_AUDIO_MIME_TYPES,
};
pub use scanner::DirectoryScanner;
