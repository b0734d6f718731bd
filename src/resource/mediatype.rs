use std::collections::HashMap;

use crate::constants::mediatype::DEFAULT_MEDIA_TYPES;
use crate::types::{Extension, MediaTypeValue};

/// Immutable lookup from lowercase file extension to canonical media type.
///
/// Passed to `ResourceBuilder` as configuration. Extending it for one dataset
/// produces a new value and never touches a shared table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaTypeTable {
    entries: HashMap<Extension, MediaTypeValue>,
}

impl MediaTypeTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace an entry. The extension is stored lowercased.
    pub fn with_entry(
        mut self,
        extension: impl AsRef<str>,
        media_type: impl Into<MediaTypeValue>,
    ) -> Self {
        self.entries
            .insert(extension.as_ref().to_ascii_lowercase(), media_type.into());
        self
    }

    /// Resolve an extension, case-insensitively.
    pub fn resolve(&self, extension: &str) -> Option<&str> {
        self.entries
            .get(&extension.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Number of known extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MediaTypeTable {
    fn default() -> Self {
        DEFAULT_MEDIA_TYPES
            .iter()
            .fold(Self::empty(), |table, (extension, media_type)| {
                table.with_entry(extension, *media_type)
            })
    }
}
