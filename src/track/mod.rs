//! Track identity and payload types
//!
//! This module provides:
//! - The closed set of media types (audio, video, subtitle, other)
//! - `Track`: immutable identity plus registry-managed session state
//! - `TrackMetadata`: opaque demuxer-supplied key/value pairs
//! - `TrackPayload`: one packet or frame addressed to a track

pub mod identity;
pub mod metadata;
pub mod payload;

pub use identity::{MediaType, Track, TrackId};
pub use metadata::TrackMetadata;
pub use payload::TrackPayload;
