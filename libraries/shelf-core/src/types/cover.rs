/// Embedded cover artwork
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cover image extracted from an audio file's tags
///
/// The image owns its byte buffer and no caller can mutate it in place.
/// Bytes are copied in on construction and on `set_data`. `data` returns an
/// owned copy, while `bytes` lends a read-only view of the stored buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    data: Vec<u8>,
    mime_type: Option<String>,
    width: u32,
    height: u32,
}

impl CoverImage {
    /// Create a cover image from raw bytes
    pub fn new(data: &[u8], mime_type: Option<String>, width: u32, height: u32) -> Self {
        Self {
            data: data.to_vec(),
            mime_type,
            width,
            height,
        }
    }

    /// Create an empty cover image
    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy of the image bytes
    pub fn data(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Read-only view of the stored bytes, valid until the next `set_data`
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Replace the image bytes with a copy of `data`
    pub fn set_data(&mut self, data: &[u8]) {
        self.data = data.to_vec();
    }

    /// Image MIME type (e.g. "image/jpeg")
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn set_mime_type(&mut self, mime_type: Option<String>) {
        self.mime_type = mime_type;
    }

    /// Width in pixels (0 if unknown)
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Height in pixels (0 if unknown)
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Size of the payload in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// An image with no payload is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Short human readable description, e.g. "image/png (300x300)"
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "No cover".to_string();
        }

        format!(
            "{} ({}x{})",
            self.mime_type.as_deref().unwrap_or("unknown type"),
            self.width,
            self.height
        )
    }
}

impl fmt::Display for CoverImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CoverImage {{ mime_type: {}, width: {}, height: {}, bytes: {} }}",
            self.mime_type.as_deref().unwrap_or("none"),
            self.width,
            self.height,
            self.data.len()
        )
    }
}
