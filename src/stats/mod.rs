//! Statistics and counters for the track model

pub mod metrics;

pub use metrics::{RegistryStats, RouterStats, RouterStatsSnapshot};
