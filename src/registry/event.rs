//! Selection change events
//!
//! Events broadcast by the registry after a selection mutation commits.
//! Decoder pools and renderers subscribe to start or stop per-track
//! work; the event carries both sides of a swap so a consumer can tear
//! down the old track before spinning up the new one.

use crate::track::MediaType;

/// Notification that the active track for a media type changed
///
/// Emitted after the mutation is committed, so a subscriber that reacts
/// by querying the registry always observes the new selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    /// Media type whose selection changed
    pub media_type: MediaType,
    /// Newly selected track index (`None` when the type was deselected)
    pub selected: Option<u32>,
    /// Previously selected track index, if any
    pub deselected: Option<u32>,
}
