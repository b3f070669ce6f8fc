//! Downstream sinks for routed payloads
//!
//! A sink is the channel into the pipeline stage that consumes one
//! media type: the audio decoder pool, the video decoder pool, the
//! subtitle renderer. The router holds at most one sink per media type
//! and pushes [`RoutedPayload`]s into it for selected tracks.

use tokio::sync::mpsc;

use crate::track::{Track, TrackPayload};

/// A payload paired with a snapshot of the track it belongs to
///
/// The snapshot is taken at routing time, so the consumer sees the
/// selection state and metadata that justified the delivery, even if
/// the registry moves on afterwards.
#[derive(Debug, Clone)]
pub struct RoutedPayload {
    /// The track the payload belongs to
    pub track: Track,
    /// The payload itself
    pub payload: TrackPayload,
}

/// Sending half of a downstream sink
pub type TrackSink = mpsc::Sender<RoutedPayload>;

/// Create a bounded sink channel pair
///
/// Convenience for collaborators wiring a decoder: the sender goes to
/// [`TrackRouter::set_sink`](super::TrackRouter::set_sink), the
/// receiver to the decode task.
pub fn sink_channel(capacity: usize) -> (TrackSink, mpsc::Receiver<RoutedPayload>) {
    mpsc::channel(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::MediaType;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_sink_channel_round_trip() {
        let (sink, mut rx) = sink_channel(4);

        let track = Track::new(MediaType::Audio, 0).unwrap();
        let payload = TrackPayload::new(10, Bytes::from_static(&[1]));

        sink.send(RoutedPayload { track, payload }).await.unwrap();

        let routed = rx.recv().await.unwrap();
        assert_eq!(routed.track.index(), 0);
        assert_eq!(routed.payload.timestamp_ms, 10);
    }
}
