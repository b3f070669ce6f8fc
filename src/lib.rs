//! Track identity, selection, and payload routing for media playback
//! pipelines.
//!
//! A playback session juggles several independently-timed stages: a
//! demux task discovering streams and producing packets, decode tasks
//! consuming them, a render task pacing output. The track is the
//! synchronization key they all share. This crate models that key and
//! nothing else — container parsing, codecs, and presentation timing
//! live in the collaborators around it.
//!
//! - [`Track`]: immutable `(media type, index)` identity plus
//!   registry-managed session state (selection, metadata)
//! - [`TrackRegistry`]: per-session owner of all discovered tracks;
//!   uniqueness, discovery freeze, atomic selection swaps
//! - [`TrackRouter`]: filters packet/frame payloads down to the
//!   selected tracks and forwards them to per-media-type sinks
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use bytes::Bytes;
//! use tracks_rs::{
//!     sink_channel, MediaType, RouteOutcome, Track, TrackPayload, TrackRegistry, TrackRouter,
//! };
//!
//! # async fn example() -> Result<(), tracks_rs::TrackError> {
//! let registry = Arc::new(TrackRegistry::new());
//!
//! // Demuxer: discover streams, then freeze the identity set.
//! registry.register(Track::new(MediaType::Audio, 0)?).await?;
//! registry.register(Track::new(MediaType::Video, 0)?).await?;
//! registry.close_discovery().await;
//!
//! // Session: pick the active audio track.
//! registry.select(MediaType::Audio, 0).await?;
//!
//! // Pipeline: wire a decoder sink and route packets through it.
//! let router = TrackRouter::new(Arc::clone(&registry));
//! let (sink, mut decoder_rx) = sink_channel(64);
//! router.set_sink(MediaType::Audio, sink).await;
//!
//! let packet = TrackPayload::new(0, Bytes::from_static(b"..."));
//! let outcome = router.route(MediaType::Audio, 0, packet).await?;
//! assert_eq!(outcome, RouteOutcome::Delivered);
//! # Ok(())
//! # }
//! ```

pub mod registry;
pub mod router;
pub mod stats;
pub mod track;

pub use registry::{RegistryConfig, SelectionChanged, TrackError, TrackRegistry};
pub use router::{sink_channel, RouteOutcome, RoutedPayload, TrackRouter, TrackSink};
pub use stats::{RegistryStats, RouterStats, RouterStatsSnapshot};
pub use track::{MediaType, Track, TrackId, TrackMetadata, TrackPayload};
