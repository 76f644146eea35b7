//! Background task appending live system readings
//!
//! One reading per interval goes into the [`LiveFeed`] and, when a broadcast
//! sender is attached, out to every WebSocket subscriber.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::dashboard::feed::LiveFeed;
use crate::dashboard::types::{UpdateType, WebSocketUpdate};
use crate::synth::{RngSource, Synthesizer, SystemMetricsSnapshot};

/// Periodic producer for the live feed
pub struct LiveTicker {
    feed: Arc<LiveFeed>,
    synth: Synthesizer,
    interval: Duration,
    seed: Option<u64>,
    ws_broadcast: Option<broadcast::Sender<WebSocketUpdate>>,
}

impl LiveTicker {
    pub fn new(feed: Arc<LiveFeed>, synth: Synthesizer, interval: Duration) -> Self {
        Self {
            feed,
            synth,
            interval,
            seed: None,
            ws_broadcast: None,
        }
    }

    /// Reproducible readings (offset from the dataset seed so they differ).
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed.map(|s| s.wrapping_add(1));
        self
    }

    /// Publish every reading to dashboard clients.
    pub fn with_broadcast(mut self, sender: broadcast::Sender<WebSocketUpdate>) -> Self {
        self.ws_broadcast = Some(sender);
        self
    }

    /// Spawn the ticker. The first reading lands one interval after start.
    pub fn start(self, cancel_token: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let start = tokio::time::Instant::now() + self.interval;
            let mut interval = tokio::time::interval_at(start, self.interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            let mut rng = RngSource::from_optional_seed(self.seed);

            tracing::info!(
                interval_ms = self.interval.as_millis() as u64,
                window = self.feed.capacity(),
                "Live ticker started"
            );

            loop {
                tokio::select! {
                    _ = cancel_token.cancelled() => {
                        tracing::info!("Live ticker shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let snapshot = self.feed.tick(&self.synth, &mut rng);
                        crate::metrics::set_live_feed_size(self.feed.len());
                        tracing::debug!(
                            cpu = snapshot.cpu_usage,
                            memory = snapshot.memory_usage,
                            "Live snapshot appended"
                        );
                        self.broadcast(&snapshot);
                    }
                }
            }
        })
    }

    fn broadcast(&self, snapshot: &SystemMetricsSnapshot) {
        if let Some(ref sender) = self.ws_broadcast {
            // No subscribers is not an error
            let _ = sender.send(create_system_metrics_update(snapshot));
        }
    }
}

/// Wrap a live reading for WebSocket clients.
pub fn create_system_metrics_update(snapshot: &SystemMetricsSnapshot) -> WebSocketUpdate {
    WebSocketUpdate {
        update_type: UpdateType::SystemMetrics,
        data: serde_json::to_value(snapshot).unwrap_or(serde_json::Value::Null),
    }
}
