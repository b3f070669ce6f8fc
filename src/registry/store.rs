//! Track registry implementation
//!
//! The per-session registry that owns every discovered track, enforces
//! identity uniqueness, and serializes selection changes.

use tokio::sync::{broadcast, RwLock};

use crate::stats::RegistryStats;
use crate::track::{MediaType, Track, TrackId};

use super::config::RegistryConfig;
use super::entry::TrackEntry;
use super::error::TrackError;
use super::event::SelectionChanged;

/// Registry state guarded by the lock
///
/// Everything mutable lives here so a selection swap (clear old, set
/// new) commits under one write-lock acquisition and is never observed
/// half-done.
#[derive(Debug, Default)]
struct RegistryInner {
    /// Tracks in discovery order
    tracks: Vec<TrackEntry>,

    /// Discovery finished; identity set is frozen
    closed: bool,

    /// Owning session tore down
    retired: bool,
}

impl RegistryInner {
    fn position(&self, id: TrackId) -> Option<usize> {
        self.tracks
            .iter()
            .position(|entry| entry.is_live() && entry.track.id() == id)
    }

    fn selected_position(&self, media_type: MediaType) -> Option<usize> {
        self.tracks.iter().position(|entry| {
            entry.is_live()
                && entry.track.media_type() == media_type
                && entry.track.is_selected()
        })
    }
}

/// Per-session registry of all discovered tracks
///
/// Thread-safe via `RwLock`: lookups run concurrently with each other,
/// while `register`, `select`, and metadata merges take the write lock
/// so every reader sees either the state before a mutation or after it,
/// never a partial update. Lookups return `Track` snapshots, so no
/// caller can touch registry state outside the lock.
pub struct TrackRegistry {
    /// Mutable registry state
    inner: RwLock<RegistryInner>,

    /// Fan-out for selection change notifications
    events: broadcast::Sender<SelectionChanged>,

    /// Configuration
    config: RegistryConfig,
}

impl TrackRegistry {
    /// Create a new registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity);

        Self {
            inner: RwLock::new(RegistryInner::default()),
            events,
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a discovered track
    ///
    /// Tracks keep discovery order. Fails with `DuplicateIdentity` if
    /// the `(media type, index)` pair is already taken, with
    /// `RegistryClosed` once discovery has been finalized (or the
    /// session retired), and with `RegistryFull` past the configured
    /// limit. A failed registration leaves existing tracks untouched.
    pub async fn register(&self, track: Track) -> Result<(), TrackError> {
        let mut inner = self.inner.write().await;

        if inner.closed || inner.retired {
            return Err(TrackError::RegistryClosed);
        }

        if self.config.max_tracks > 0 && inner.tracks.len() >= self.config.max_tracks {
            return Err(TrackError::RegistryFull(self.config.max_tracks));
        }

        let id = track.id();
        if inner.position(id).is_some() {
            return Err(TrackError::DuplicateIdentity(id));
        }

        inner.tracks.push(TrackEntry::new(track));

        tracing::info!(
            track = %id,
            total = inner.tracks.len(),
            "Track registered"
        );

        Ok(())
    }

    /// Close discovery, freezing the set of track identities
    ///
    /// Idempotent. Selection and metadata merges keep working; only
    /// registration of new identities is refused from here on.
    pub async fn close_discovery(&self) {
        let mut inner = self.inner.write().await;

        if !inner.closed {
            inner.closed = true;
            tracing::info!(tracks = inner.tracks.len(), "Discovery closed");
        }
    }

    /// Select the active track for its media type
    ///
    /// At most one track per media type is selected at any time: the
    /// previous selection (if any) is cleared in the same write-lock
    /// acquisition, so readers never observe zero or two selected
    /// tracks mid-swap. Emits [`SelectionChanged`] after the swap
    /// commits. Selecting the already-active track is a no-op and
    /// emits nothing.
    pub async fn select(&self, media_type: MediaType, index: u32) -> Result<(), TrackError> {
        let id = TrackId::new(media_type, index);
        let mut inner = self.inner.write().await;

        let target = inner.position(id).ok_or(TrackError::NotFound(id))?;

        if inner.tracks[target].track.is_selected() {
            return Ok(());
        }

        let previous = inner.selected_position(media_type);
        if let Some(prev) = previous {
            inner.tracks[prev].track.set_selected(false);
        }
        inner.tracks[target].track.set_selected(true);

        let deselected = previous.map(|prev| inner.tracks[prev].track.index());

        tracing::info!(
            track = %id,
            deselected = ?deselected,
            "Track selected"
        );

        let _ = self.events.send(SelectionChanged {
            media_type,
            selected: Some(index),
            deselected,
        });

        Ok(())
    }

    /// Clear the active selection for a media type
    ///
    /// Returns the index of the track that was deselected, or `None`
    /// if nothing was selected. Covers the "disable subtitles" case
    /// where a type goes from one active track to none.
    pub async fn deselect(&self, media_type: MediaType) -> Option<u32> {
        let mut inner = self.inner.write().await;

        let position = inner.selected_position(media_type)?;
        inner.tracks[position].track.set_selected(false);
        let index = inner.tracks[position].track.index();

        tracing::info!(
            track = %TrackId::new(media_type, index),
            "Track deselected"
        );

        let _ = self.events.send(SelectionChanged {
            media_type,
            selected: None,
            deselected: Some(index),
        });

        Some(index)
    }

    /// Look up a track by identity
    ///
    /// Returns a snapshot of the track's current state, or `None` when
    /// no live track has that identity. Absence is not an error here;
    /// callers that need a hard failure use `select` or routing.
    pub async fn find(&self, media_type: MediaType, index: u32) -> Option<Track> {
        let inner = self.inner.read().await;
        let id = TrackId::new(media_type, index);

        inner
            .position(id)
            .map(|position| inner.tracks[position].track.clone())
    }

    /// All live tracks of one media type, in discovery order
    pub async fn all_of_type(&self, media_type: MediaType) -> Vec<Track> {
        let inner = self.inner.read().await;

        inner
            .tracks
            .iter()
            .filter(|entry| entry.is_live() && entry.track.media_type() == media_type)
            .map(|entry| entry.track.clone())
            .collect()
    }

    /// All live tracks, in discovery order
    pub async fn all(&self) -> Vec<Track> {
        let inner = self.inner.read().await;

        inner
            .tracks
            .iter()
            .filter(|entry| entry.is_live())
            .map(|entry| entry.track.clone())
            .collect()
    }

    /// The currently selected track of a media type, if any
    pub async fn selected_of_type(&self, media_type: MediaType) -> Option<Track> {
        let inner = self.inner.read().await;

        inner
            .selected_position(media_type)
            .map(|position| inner.tracks[position].track.clone())
    }

    /// Merge metadata into a registered track
    ///
    /// Demuxer-only path for container metadata that resolves after
    /// initial discovery (late-bound subtitle formats, bitrate from
    /// decode progress). Works after `close_discovery`; only the
    /// identity set is frozen, not metadata.
    pub async fn merge_metadata<I>(
        &self,
        media_type: MediaType,
        index: u32,
        entries: I,
    ) -> Result<(), TrackError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let id = TrackId::new(media_type, index);
        let mut inner = self.inner.write().await;

        let position = inner.position(id).ok_or(TrackError::NotFound(id))?;
        inner.tracks[position].track.merge_metadata(entries);

        tracing::debug!(track = %id, "Track metadata merged");

        Ok(())
    }

    /// Retire every track at session teardown
    ///
    /// Idempotent. Retired tracks stop resolving in lookups, selection,
    /// and routing; registration reports `RegistryClosed` afterwards.
    /// In-flight routing that already took its snapshot finishes on
    /// that snapshot, so nothing observes a half-torn-down track.
    pub async fn retire(&self) {
        let mut inner = self.inner.write().await;

        if inner.retired {
            return;
        }

        inner.closed = true;
        inner.retired = true;
        for entry in &mut inner.tracks {
            entry.retire();
        }

        tracing::info!(tracks = inner.tracks.len(), "Registry retired");
    }

    /// Subscribe to selection change notifications
    pub fn subscribe_selection(&self) -> broadcast::Receiver<SelectionChanged> {
        self.events.subscribe()
    }

    /// Number of live tracks
    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        inner.tracks.iter().filter(|entry| entry.is_live()).count()
    }

    /// Whether the registry holds no live tracks
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Whether discovery has been closed
    pub async fn is_closed(&self) -> bool {
        self.inner.read().await.closed
    }

    /// Whether the registry has been retired
    pub async fn is_retired(&self) -> bool {
        self.inner.read().await.retired
    }

    /// Get registry statistics
    pub async fn stats(&self) -> RegistryStats {
        let inner = self.inner.read().await;

        let mut stats = RegistryStats {
            closed: inner.closed,
            retired: inner.retired,
            ..RegistryStats::default()
        };

        for entry in inner.tracks.iter().filter(|entry| entry.is_live()) {
            stats.total_tracks += 1;
            match entry.track.media_type() {
                MediaType::Audio => stats.audio_tracks += 1,
                MediaType::Video => stats.video_tracks += 1,
                MediaType::Subtitle => stats.subtitle_tracks += 1,
                MediaType::Other => stats.other_tracks += 1,
            }
        }

        stats
    }
}

impl Default for TrackRegistry {
    fn default() -> Self {
        Self::new()
    }
}
