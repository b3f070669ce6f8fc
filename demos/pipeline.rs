//! Track selection and routing walkthrough
//!
//! Run with: cargo run --example pipeline
//!
//! Plays the roles of all three collaborators around the track model:
//! a demuxer discovering streams, a session picking the active tracks,
//! and a decode task draining the routed payloads. Watch the log
//! output to see unselected streams being filtered and the audio
//! selection swapping mid-stream.

use std::sync::Arc;

use bytes::Bytes;

use tracks_rs::{
    sink_channel, MediaType, Track, TrackPayload, TrackRegistry, TrackRouter,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tracks_rs=debug".parse()?)
                .add_directive("pipeline=info".parse()?),
        )
        .init();

    // Demuxer: discover the container's streams, then freeze the set.
    let registry = Arc::new(TrackRegistry::new());
    registry.register(Track::new(MediaType::Audio, 0)?).await?;
    registry.register(Track::new(MediaType::Audio, 1)?).await?;
    registry.register(Track::new(MediaType::Video, 0)?).await?;
    registry
        .register(Track::new(MediaType::Subtitle, 0)?)
        .await?;
    registry.close_discovery().await;

    registry
        .merge_metadata(
            MediaType::Audio,
            1,
            [
                ("language".to_string(), "eng".to_string()),
                ("codec".to_string(), "aac".to_string()),
            ],
        )
        .await?;

    // Session: one active track per rendered media type.
    registry.select(MediaType::Audio, 0).await?;
    registry.select(MediaType::Video, 0).await?;

    let router = Arc::new(TrackRouter::new(Arc::clone(&registry)));

    // Decoder pool: log selection changes as they arrive.
    let mut selection_events = router.selection_events();
    tokio::spawn(async move {
        while let Ok(event) = selection_events.recv().await {
            tracing::info!(
                media_type = %event.media_type,
                selected = ?event.selected,
                deselected = ?event.deselected,
                "Decoder pool saw selection change"
            );
        }
    });

    // Wire an audio decode task; video and subtitles stay unwired so
    // their payloads show up as NoSink drops in the router stats.
    let (audio_sink, mut audio_rx) = sink_channel(64);
    router.set_sink(MediaType::Audio, audio_sink).await;

    let decode_task = tokio::spawn(async move {
        let mut decoded = 0u64;
        while let Some(routed) = audio_rx.recv().await {
            tracing::info!(
                track = %routed.track.id(),
                timestamp_ms = routed.payload.timestamp_ms,
                language = routed.track.metadata().get("language").unwrap_or("und"),
                "Decoding audio payload"
            );
            decoded += 1;
        }
        decoded
    });

    // Demux loop: every stream produces packets; only selected tracks
    // get through. Swap the audio selection halfway.
    for ts in (0u64..200).step_by(20) {
        if ts == 100 {
            registry.select(MediaType::Audio, 1).await?;
        }

        for index in [0, 1] {
            let packet = TrackPayload::new(ts, Bytes::from_static(b"audio"));
            router.route(MediaType::Audio, index, packet).await?;
        }
        let frame = TrackPayload::keyframe(ts, Bytes::from_static(b"video"));
        router.route(MediaType::Video, 0, frame).await?;
    }

    router.clear_sink(MediaType::Audio).await;
    let decoded = decode_task.await?;

    let stats = router.stats();
    println!("decoded audio payloads: {}", decoded);
    println!(
        "delivered={} filtered={} no_sink={} not_found={}",
        stats.delivered, stats.filtered, stats.no_sink, stats.not_found
    );

    // Session teardown.
    registry.retire().await;

    Ok(())
}
