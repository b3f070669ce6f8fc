//! Track identity types
//!
//! This module defines the key types that identify a media track within
//! a playback session: the closed set of media types and the
//! `(media type, index)` pair that names a track for its whole lifetime.

use crate::registry::TrackError;

use super::metadata::TrackMetadata;

/// Kind of media carried by a track
///
/// The set is closed: a player renders audio, video, and subtitles, and
/// anything else (chapters, data streams) falls under `Other`. Decision
/// points match exhaustively rather than subclassing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Audio stream
    Audio,
    /// Video stream
    Video,
    /// Subtitle stream
    Subtitle,
    /// Anything else the container declares (data, chapters, ...)
    Other,
}

impl MediaType {
    /// All media types, for exhaustive iteration
    pub const ALL: [MediaType; 4] = [
        MediaType::Audio,
        MediaType::Video,
        MediaType::Subtitle,
        MediaType::Other,
    ];

    /// Short lowercase name used in logs and identifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Audio => "audio",
            MediaType::Video => "video",
            MediaType::Subtitle => "subtitle",
            MediaType::Other => "other",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique identifier for a track (media type + stream index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackId {
    /// Kind of media the track carries
    pub media_type: MediaType,
    /// Stream index within the container
    pub index: u32,
}

impl TrackId {
    /// Create a new track ID
    pub fn new(media_type: MediaType, index: u32) -> Self {
        Self { media_type, index }
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.media_type, self.index)
    }
}

/// One media stream within a playback session
///
/// Identity (`media_type`, `index`) is fixed at construction and never
/// changes; it is safe to read from any thread without a lock. Session
/// state (`selected`, `metadata`) is mutable only through the owning
/// [`TrackRegistry`](crate::registry::TrackRegistry), which serializes
/// updates behind its lock. Values handed out by registry lookups are
/// snapshots: cheap clones whose session state reflects the moment of
/// the lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    media_type: MediaType,
    index: u32,
    selected: bool,
    metadata: TrackMetadata,
}

impl Track {
    /// Create a new track
    ///
    /// This is the only construction path. The index is validated here
    /// so every `Track` in existence has a well-formed identity: a
    /// negative index (or one beyond `u32::MAX`) is rejected with
    /// [`TrackError::InvalidIndex`].
    pub fn new(media_type: MediaType, index: i64) -> Result<Self, TrackError> {
        let index = u32::try_from(index).map_err(|_| TrackError::InvalidIndex(index))?;

        Ok(Self {
            media_type,
            index,
            selected: false,
            metadata: TrackMetadata::new(),
        })
    }

    /// Get the media type
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Get the stream index
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Get the track's identifier
    pub fn id(&self) -> TrackId {
        TrackId::new(self.media_type, self.index)
    }

    /// Whether this track is the active one for its media type
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Get the track's metadata
    pub fn metadata(&self) -> &TrackMetadata {
        &self.metadata
    }

    /// Set the selection flag
    ///
    /// Registry-internal: callers go through
    /// [`TrackRegistry::select`](crate::registry::TrackRegistry::select).
    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Merge metadata entries, overwriting existing keys
    ///
    /// Registry-internal: the demuxer reaches this through
    /// [`TrackRegistry::merge_metadata`](crate::registry::TrackRegistry::merge_metadata).
    pub(crate) fn merge_metadata<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.metadata.merge(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_track() {
        let track = Track::new(MediaType::Audio, 3).unwrap();

        assert_eq!(track.media_type(), MediaType::Audio);
        assert_eq!(track.index(), 3);
        assert!(!track.is_selected());
        assert!(track.metadata().is_empty());
    }

    #[test]
    fn test_negative_index_rejected() {
        let result = Track::new(MediaType::Video, -1);
        assert!(matches!(result, Err(TrackError::InvalidIndex(-1))));
    }

    #[test]
    fn test_oversized_index_rejected() {
        let result = Track::new(MediaType::Video, i64::from(u32::MAX) + 1);
        assert!(matches!(result, Err(TrackError::InvalidIndex(_))));
    }

    #[test]
    fn test_track_id_display() {
        let track = Track::new(MediaType::Subtitle, 7).unwrap();
        assert_eq!(track.id().to_string(), "subtitle/7");
    }

    #[test]
    fn test_media_type_all_is_exhaustive() {
        // Every media type must appear exactly once in ALL.
        for media_type in MediaType::ALL {
            assert_eq!(
                MediaType::ALL.iter().filter(|t| **t == media_type).count(),
                1
            );
        }
    }
}
