/// Raw ID3 tag types
use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single raw tag field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id3Tag {
    /// Technical identifier (e.g. "TITLE", "TPE1")
    pub id: String,

    /// Human readable description
    pub description: String,

    /// Text value
    pub value: String,
}

impl Id3Tag {
    /// Create a new tag
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            value: value.into(),
        }
    }
}

/// Raw tags of one file, keyed by tag identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id3TagSet {
    tags: BTreeMap<String, Id3Tag>,
}

impl Id3TagSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag, replacing any tag with the same id
    ///
    /// Returns the replaced tag, if any.
    pub fn insert(&mut self, tag: Id3Tag) -> Result<Option<Id3Tag>> {
        if tag.id.is_empty() {
            return Err(ShelfError::invalid_argument("tag id must not be empty"));
        }
        Ok(self.tags.insert(tag.id.clone(), tag))
    }

    /// Look up a tag by id
    pub fn get(&self, id: &str) -> Option<&Id3Tag> {
        self.tags.get(id)
    }

    /// Whether a tag with this id is present
    pub fn contains(&self, id: &str) -> bool {
        self.tags.contains_key(id)
    }

    /// Remove a tag by id, reporting whether one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        self.tags.remove(id).is_some()
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate tags in id order
    pub fn iter(&self) -> impl Iterator<Item = &Id3Tag> {
        self.tags.values()
    }
}
