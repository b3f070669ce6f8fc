//! Payload routing implementation
//!
//! The router sits between the demuxer (or decoder) and the downstream
//! stages: every packet or frame goes through `route`, which filters
//! out payloads for unselected tracks before any downstream work is
//! spent on them.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use crate::registry::{SelectionChanged, TrackError, TrackRegistry};
use crate::stats::{RouterStats, RouterStatsSnapshot};
use crate::track::{MediaType, TrackId, TrackPayload};

use super::sink::{RoutedPayload, TrackSink};

/// Outcome of routing one payload
///
/// Only `Delivered` moved data downstream. The other outcomes are
/// normal filtering, not errors: a pipeline keeps demuxing unselected
/// streams and simply drops their payloads here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Payload was handed to the downstream sink
    Delivered,
    /// Track exists but is not selected; payload dropped
    NotSelected,
    /// Track is selected but no sink is wired for its media type
    NoSink,
}

/// Routes packet and frame payloads to per-media-type sinks
///
/// The selection check runs under the registry's read lock; delivery
/// happens after the lock is released, so a slow decoder never stalls
/// registry writers. The track snapshot and sink handle cloned during
/// the check keep everything the delivery touches alive even if the
/// session retires the registry mid-flight.
pub struct TrackRouter {
    /// Registry consulted for identity and selection state
    registry: Arc<TrackRegistry>,

    /// One downstream sink per media type
    sinks: RwLock<HashMap<MediaType, TrackSink>>,

    /// Routing counters
    stats: RouterStats,
}

impl TrackRouter {
    /// Create a router over a registry
    pub fn new(registry: Arc<TrackRegistry>) -> Self {
        Self {
            registry,
            sinks: RwLock::new(HashMap::new()),
            stats: RouterStats::new(),
        }
    }

    /// Get the underlying registry
    pub fn registry(&self) -> &Arc<TrackRegistry> {
        &self.registry
    }

    /// Wire the downstream sink for a media type
    ///
    /// Replaces any previous sink for that type.
    pub async fn set_sink(&self, media_type: MediaType, sink: TrackSink) {
        let mut sinks = self.sinks.write().await;
        sinks.insert(media_type, sink);

        tracing::debug!(media_type = %media_type, "Sink wired");
    }

    /// Remove the sink for a media type
    pub async fn clear_sink(&self, media_type: MediaType) {
        let mut sinks = self.sinks.write().await;
        if sinks.remove(&media_type).is_some() {
            tracing::debug!(media_type = %media_type, "Sink removed");
        }
    }

    /// Route a payload to the track it belongs to
    ///
    /// Looks the track up, drops the payload with `NotSelected` when
    /// the track is not the active one for its type, and otherwise
    /// forwards it to the sink wired for that media type. Routing to
    /// an identity the registry does not know (including after session
    /// teardown) fails with [`TrackError::NotFound`].
    pub async fn route(
        &self,
        media_type: MediaType,
        index: u32,
        payload: TrackPayload,
    ) -> Result<RouteOutcome, TrackError> {
        let id = TrackId::new(media_type, index);

        // Snapshot under the registry's read lock; everything past this
        // point runs lock-free on owned clones.
        let track = match self.registry.find(media_type, index).await {
            Some(track) => track,
            None => {
                self.stats.record_not_found();
                return Err(TrackError::NotFound(id));
            }
        };

        if !track.is_selected() {
            self.stats.record_filtered();
            tracing::trace!(track = %id, "Payload dropped: track not selected");
            return Ok(RouteOutcome::NotSelected);
        }

        let sink = {
            let sinks = self.sinks.read().await;
            sinks.get(&media_type).cloned()
        };

        let Some(sink) = sink else {
            self.stats.record_no_sink();
            tracing::debug!(track = %id, "Payload dropped: no sink for media type");
            return Ok(RouteOutcome::NoSink);
        };

        // Delivery may wait on sink capacity, but no lock is held here.
        if sink.send(RoutedPayload { track, payload }).await.is_err() {
            self.stats.record_no_sink();
            tracing::debug!(track = %id, "Payload dropped: sink closed");
            return Ok(RouteOutcome::NoSink);
        }

        self.stats.record_delivered();
        Ok(RouteOutcome::Delivered)
    }

    /// Subscribe to selection change notifications
    ///
    /// Decoder pools use this to start work for a newly selected track
    /// and stop work for the one it displaced.
    pub fn selection_events(&self) -> broadcast::Receiver<SelectionChanged> {
        self.registry.subscribe_selection()
    }

    /// Take a snapshot of the routing counters
    pub fn stats(&self) -> RouterStatsSnapshot {
        self.stats.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::sink::sink_channel;
    use crate::track::Track;
    use bytes::Bytes;

    async fn registry_with(tracks: &[(MediaType, i64)]) -> Arc<TrackRegistry> {
        let registry = Arc::new(TrackRegistry::new());
        for (media_type, index) in tracks {
            registry
                .register(Track::new(*media_type, *index).unwrap())
                .await
                .unwrap();
        }
        registry
    }

    fn payload() -> TrackPayload {
        TrackPayload::new(0, Bytes::from_static(&[0xAB]))
    }

    #[tokio::test]
    async fn test_route_not_found() {
        let registry = registry_with(&[]).await;
        let router = TrackRouter::new(registry);

        let result = router.route(MediaType::Audio, 0, payload()).await;
        assert_eq!(
            result,
            Err(TrackError::NotFound(TrackId::new(MediaType::Audio, 0)))
        );
        assert_eq!(router.stats().not_found, 1);
    }

    #[tokio::test]
    async fn test_route_not_selected_is_silent_drop() {
        let registry = registry_with(&[(MediaType::Audio, 0)]).await;
        let router = TrackRouter::new(Arc::clone(&registry));

        let (sink, mut rx) = sink_channel(4);
        router.set_sink(MediaType::Audio, sink).await;

        let outcome = router.route(MediaType::Audio, 0, payload()).await.unwrap();
        assert_eq!(outcome, RouteOutcome::NotSelected);

        // Nothing was delivered downstream.
        assert!(rx.try_recv().is_err());
        assert_eq!(router.stats().filtered, 1);
        assert_eq!(router.stats().delivered, 0);
    }

    #[tokio::test]
    async fn test_route_delivers_to_selected() {
        let registry = registry_with(&[(MediaType::Video, 0), (MediaType::Video, 1)]).await;
        let router = TrackRouter::new(Arc::clone(&registry));

        let (sink, mut rx) = sink_channel(4);
        router.set_sink(MediaType::Video, sink).await;

        registry.select(MediaType::Video, 1).await.unwrap();

        let outcome = router
            .route(MediaType::Video, 1, TrackPayload::keyframe(40, Bytes::from_static(&[1, 2])))
            .await
            .unwrap();
        assert_eq!(outcome, RouteOutcome::Delivered);

        let routed = rx.recv().await.unwrap();
        assert_eq!(routed.track.id(), TrackId::new(MediaType::Video, 1));
        assert!(routed.track.is_selected());
        assert!(routed.payload.keyframe);
        assert_eq!(routed.payload.timestamp_ms, 40);

        // The unselected sibling still gets filtered.
        let outcome = router.route(MediaType::Video, 0, payload()).await.unwrap();
        assert_eq!(outcome, RouteOutcome::NotSelected);
    }

    #[tokio::test]
    async fn test_route_no_sink() {
        let registry = registry_with(&[(MediaType::Audio, 0)]).await;
        let router = TrackRouter::new(Arc::clone(&registry));

        registry.select(MediaType::Audio, 0).await.unwrap();

        let outcome = router.route(MediaType::Audio, 0, payload()).await.unwrap();
        assert_eq!(outcome, RouteOutcome::NoSink);
        assert_eq!(router.stats().no_sink, 1);
    }

    #[tokio::test]
    async fn test_route_closed_sink() {
        let registry = registry_with(&[(MediaType::Audio, 0)]).await;
        let router = TrackRouter::new(Arc::clone(&registry));

        let (sink, rx) = sink_channel(1);
        router.set_sink(MediaType::Audio, sink).await;
        drop(rx);

        registry.select(MediaType::Audio, 0).await.unwrap();

        let outcome = router.route(MediaType::Audio, 0, payload()).await.unwrap();
        assert_eq!(outcome, RouteOutcome::NoSink);
    }

    #[tokio::test]
    async fn test_route_after_retire() {
        let registry = registry_with(&[(MediaType::Audio, 0)]).await;
        let router = TrackRouter::new(Arc::clone(&registry));

        registry.select(MediaType::Audio, 0).await.unwrap();
        registry.retire().await;

        let result = router.route(MediaType::Audio, 0, payload()).await;
        assert_eq!(
            result,
            Err(TrackError::NotFound(TrackId::new(MediaType::Audio, 0)))
        );
    }

    #[tokio::test]
    async fn test_selection_events_reach_subscribers() {
        let registry = registry_with(&[(MediaType::Audio, 0), (MediaType::Audio, 1)]).await;
        let router = TrackRouter::new(Arc::clone(&registry));

        let mut events = router.selection_events();

        registry.select(MediaType::Audio, 0).await.unwrap();
        registry.select(MediaType::Audio, 1).await.unwrap();

        let first = events.recv().await.unwrap();
        assert_eq!(first.selected, Some(0));
        assert_eq!(first.deselected, None);

        let second = events.recv().await.unwrap();
        assert_eq!(second.selected, Some(1));
        assert_eq!(second.deselected, Some(0));
    }

    #[tokio::test]
    async fn test_stats_match_outcomes() {
        let registry = registry_with(&[(MediaType::Audio, 0), (MediaType::Audio, 1)]).await;
        let router = TrackRouter::new(Arc::clone(&registry));

        let (sink, mut rx) = sink_channel(8);
        router.set_sink(MediaType::Audio, sink).await;

        registry.select(MediaType::Audio, 0).await.unwrap();

        router.route(MediaType::Audio, 0, payload()).await.unwrap();
        router.route(MediaType::Audio, 0, payload()).await.unwrap();
        router.route(MediaType::Audio, 1, payload()).await.unwrap();
        let _ = router.route(MediaType::Video, 0, payload()).await;

        let stats = router.stats();
        assert_eq!(stats.delivered, 2);
        assert_eq!(stats.filtered, 1);
        assert_eq!(stats.not_found, 1);
        assert_eq!(stats.no_sink, 0);

        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
    }
}
