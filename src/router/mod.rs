//! Track router: selection-aware payload routing
//!
//! The routing layer demux and decode stages go through to move
//! payloads toward the pipeline stage that consumes them. Routing is
//! conditioned on selection state, so work is only spent on the tracks
//! the session actually plays.
//!
//! # Architecture
//!
//! ```text
//!    [Demux task]                [Decode tasks]          [Render task]
//!         │ route(type, idx, payload)   ▲                      ▲
//!         ▼                             │ rx.recv()            │
//!   ┌───────────────┐   selected?  ┌────┴─────┐          ┌─────┴────┐
//!   │  TrackRouter  │─────────────►│ audio rx │          │ video rx │
//!   │  (registry    │  per-type    └──────────┘          └──────────┘
//!   │   lookup)     │  mpsc sinks
//!   └───────────────┘
//!         │ NotSelected / NoSink → dropped, counted, not an error
//!         ▼
//!     RouterStats
//! ```

pub mod route;
pub mod sink;

pub use route::{RouteOutcome, TrackRouter};
pub use sink::{sink_channel, RoutedPayload, TrackSink};
