//! Routable payload types
//!
//! A payload is one demuxed packet or decoded frame travelling through
//! the pipeline, tagged with the timing the container gave it. Payload
//! data is `Bytes`, so cloning through the routing path only bumps a
//! reference count.

use bytes::Bytes;

/// A packet or frame payload addressed to a track
#[derive(Debug, Clone)]
pub struct TrackPayload {
    /// Presentation timestamp in milliseconds
    pub timestamp_ms: u64,
    /// Payload data (zero-copy via reference counting)
    pub data: Bytes,
    /// Whether this payload is a keyframe (video only)
    pub keyframe: bool,
}

impl TrackPayload {
    /// Create a payload
    pub fn new(timestamp_ms: u64, data: Bytes) -> Self {
        Self {
            timestamp_ms,
            data,
            keyframe: false,
        }
    }

    /// Create a keyframe payload
    pub fn keyframe(timestamp_ms: u64, data: Bytes) -> Self {
        Self {
            timestamp_ms,
            data,
            keyframe: true,
        }
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload carries no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
