//! Statistics for track registries and routers

use std::sync::atomic::{AtomicU64, Ordering};

/// Registry-level statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total live tracks
    pub total_tracks: usize,
    /// Live audio tracks
    pub audio_tracks: usize,
    /// Live video tracks
    pub video_tracks: usize,
    /// Live subtitle tracks
    pub subtitle_tracks: usize,
    /// Live tracks of other types
    pub other_tracks: usize,
    /// Whether discovery has been closed
    pub closed: bool,
    /// Whether the registry has been retired
    pub retired: bool,
}

/// Router-level counters
///
/// Updated from concurrent routing calls, so the counters are atomics;
/// readers take a [`RouterStatsSnapshot`]. Relaxed ordering is enough
/// because the counters carry no cross-thread ordering obligations.
#[derive(Debug, Default)]
pub struct RouterStats {
    delivered: AtomicU64,
    filtered: AtomicU64,
    no_sink: AtomicU64,
    not_found: AtomicU64,
}

impl RouterStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a payload delivered downstream
    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a payload dropped because its track was not selected
    pub fn record_filtered(&self) {
        self.filtered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a payload dropped for lack of a downstream sink
    pub fn record_no_sink(&self) {
        self.no_sink.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a routing attempt to an unknown identity
    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of the counters
    pub fn snapshot(&self) -> RouterStatsSnapshot {
        RouterStatsSnapshot {
            delivered: self.delivered.load(Ordering::Relaxed),
            filtered: self.filtered.load(Ordering::Relaxed),
            no_sink: self.no_sink.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of router counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterStatsSnapshot {
    /// Payloads delivered to a downstream sink
    pub delivered: u64,
    /// Payloads dropped on unselected tracks
    pub filtered: u64,
    /// Payloads dropped for lack of a sink
    pub no_sink: u64,
    /// Routing attempts to unknown identities
    pub not_found: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_stats_counting() {
        let stats = RouterStats::new();

        stats.record_delivered();
        stats.record_delivered();
        stats.record_filtered();
        stats.record_no_sink();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.delivered, 2);
        assert_eq!(snapshot.filtered, 1);
        assert_eq!(snapshot.no_sink, 1);
        assert_eq!(snapshot.not_found, 0);
    }

    #[test]
    fn test_registry_stats_default() {
        let stats = RegistryStats::default();
        assert_eq!(stats.total_tracks, 0);
        assert!(!stats.closed);
        assert!(!stats.retired);
    }
}
