//! Shelf Metadata
//!
//! Metadata extraction for Shelf.
//!
//! This crate provides:
//! - The tag-reading collaborator contract (`TagReader`, `RawTag`, `RawHeader`)
//! - A lofty-backed tag reader
//! - `LibraryMetadataExtractor`, which maps raw tags into `shelf_core::Metadata`
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf_core::{MetadataExtractor, MimeChecker};
//! use shelf_metadata::LibraryMetadataExtractor;
//! use std::path::Path;
//! use std::sync::Arc;
//! # fn example(mime: Arc<dyn MimeChecker>) -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = LibraryMetadataExtractor::with_lofty(mime);
//! let metadata = extractor.extract(Path::new("/music/song.mp3"))?;
//! println!("{metadata}");
//! # Ok(())
//! # }
//! ```

mod error;
mod extractor;
mod lofty_reader;
mod reader;

pub use error::{FieldError, Result, TagReadError};
pub use extractor::LibraryMetadataExtractor;
pub use lofty_reader::LoftyTagReader;
pub use reader::{FieldKey, RawField, RawHeader, RawTag, RawTags, TagReader};
