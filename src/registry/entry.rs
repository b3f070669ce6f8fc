//! Track entry and phase types
//!
//! This module defines the per-track state stored in the registry. It
//! is internal: collaborators see `Track` snapshots, never the entry
//! itself, which is how the registry keeps the mutation surface to
//! itself.

use std::time::Instant;

use crate::track::Track;

/// Lifecycle phase of a registered track
///
/// Selection is tracked on the `Track` itself; the phase only records
/// the one-way transitions. `Registered -> Retired` happens at session
/// teardown and never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TrackPhase {
    /// Track is live in the registry
    Registered,
    /// Owning session tore down; the identity is no longer routable
    Retired,
}

/// Entry for a single track in the registry
#[derive(Debug)]
pub(super) struct TrackEntry {
    /// The track itself (identity + session state)
    pub track: Track,

    /// Current lifecycle phase
    pub phase: TrackPhase,

    /// When the track was registered
    pub registered_at: Instant,
}

impl TrackEntry {
    /// Create a new entry for a freshly registered track
    pub fn new(track: Track) -> Self {
        Self {
            track,
            phase: TrackPhase::Registered,
            registered_at: Instant::now(),
        }
    }

    /// Whether the entry is live (registered and not retired)
    pub fn is_live(&self) -> bool {
        self.phase == TrackPhase::Registered
    }

    /// Retire the entry, clearing its selection
    pub fn retire(&mut self) {
        self.phase = TrackPhase::Retired;
        self.track.set_selected(false);
    }
}
