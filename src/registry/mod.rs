//! Track registry: per-session ownership of discovered tracks
//!
//! The registry is the single owner of every track a demuxer discovers
//! in a session. It enforces identity uniqueness, freezes the identity
//! set once discovery finishes, and serializes selection changes so at
//! most one track per media type is active at any observation point.
//!
//! # Architecture
//!
//! ```text
//!                         Arc<TrackRegistry>
//!                    ┌──────────────────────────┐
//!                    │ tracks: Vec<TrackEntry>  │  discovery order
//!                    │ closed / retired flags   │
//!                    │ events: broadcast::Tx    │
//!                    └────────────┬─────────────┘
//!                                 │
//!        ┌────────────────────────┼────────────────────────┐
//!        │                        │                        │
//!        ▼                        ▼                        ▼
//!   [Demuxer]                [Session]              [TrackRouter]
//!   register()               select()               find() + selection
//!   merge_metadata()         all_of_type()          check per payload
//!   close_discovery()        selected_of_type()
//! ```
//!
//! # Locking discipline
//!
//! One `tokio::sync::RwLock` guards all mutable state. Readers share
//! the lock; `register`, `select`, `deselect`, `merge_metadata`, and
//! `retire` take it exclusively, so a selection swap (clear previous,
//! set new) is atomic as far as any reader can tell. Track identity
//! never changes after construction and needs no lock at all.

pub mod config;
mod entry;
pub mod error;
pub mod event;
pub mod store;

pub use config::RegistryConfig;
pub use error::TrackError;
pub use event::SelectionChanged;
pub use store::TrackRegistry;
