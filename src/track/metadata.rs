//! Track metadata
//!
//! Opaque string key/value pairs describing a track: format descriptors,
//! language tags, codec names, bitrate hints. The track model does not
//! interpret these; it only stores what the demuxer discovers.

use std::collections::HashMap;

/// Opaque metadata attached to a track
///
/// Written by the demuxer during (and after) discovery, read-only for
/// everyone downstream. Merging overwrites existing keys, so late
/// container metadata wins over earlier placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    entries: HashMap<String, String>,
}

impl TrackMetadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge entries in, overwriting existing keys
    pub(crate) fn merge<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.entries.extend(entries);
    }
}

impl FromIterator<(String, String)> for TrackMetadata {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overwrites() {
        let mut metadata = TrackMetadata::new();

        metadata.merge([("language".to_string(), "und".to_string())]);
        assert_eq!(metadata.get("language"), Some("und"));

        metadata.merge([
            ("language".to_string(), "eng".to_string()),
            ("codec".to_string(), "aac".to_string()),
        ]);

        assert_eq!(metadata.get("language"), Some("eng"));
        assert_eq!(metadata.get("codec"), Some("aac"));
        assert_eq!(metadata.len(), 2);
    }

    #[test]
    fn test_missing_key() {
        let metadata = TrackMetadata::new();
        assert!(metadata.get("bitrate").is_none());
        assert!(!metadata.contains("bitrate"));
        assert!(metadata.is_empty());
    }
}
