//! Synthetic dataset generation
//!
//! Produces plausible LLM-gateway telemetry: request events, per-model
//! performance, per-user activity, hourly system health, daily conversation
//! quality and web automation outcomes.
//!
//! Randomness and time are capabilities. A [`Synthesizer`] holds the [`Clock`]
//! and [`Catalog`]; each call takes a `&mut dyn RandomSource`, reads the clock
//! exactly once and returns a freshly allocated collection.
//!
//! # Example
//!
//! ```rust
//! use athena::synth::{FixedClock, RngSource, Synthesizer};
//! use std::sync::Arc;
//!
//! let clock = FixedClock::parse("2026-10-19T12:00:00+00:00").unwrap();
//! let synth = Synthesizer::new(Arc::new(clock), Default::default()).unwrap();
//! let mut rng = RngSource::seeded(42);
//!
//! let snapshots = synth.system_metrics(24, &mut rng).unwrap();
//! assert_eq!(snapshots.len(), 25);
//! assert!(synth.system_metrics(-1, &mut rng).is_err());
//! ```

mod automation;
pub mod catalog;
mod conversations;
pub mod error;
mod models;
mod requests;
pub mod source;
pub mod system;
pub mod types;
mod users;
pub mod weighting;

pub use catalog::Catalog;
pub use error::SynthError;
pub use source::{Clock, FixedClock, RandomSource, RngSource, SequenceSource, SystemClock};
pub use types::*;
pub use weighting::weighted_value;

use chrono::{DateTime, FixedOffset};
use error::ensure_window;
use std::sync::Arc;

/// Dataset generator bound to a clock and a catalog
#[derive(Clone)]
pub struct Synthesizer {
    clock: Arc<dyn Clock>,
    catalog: Arc<Catalog>,
}

impl std::fmt::Debug for Synthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl Synthesizer {
    /// Validates the catalog up front so generators can index it freely.
    pub fn new(clock: Arc<dyn Clock>, catalog: Catalog) -> Result<Self, SynthError> {
        catalog.validate()?;
        Ok(Self {
            clock,
            catalog: Arc::new(catalog),
        })
    }

    /// Wall clock and the built-in catalog.
    pub fn system_default() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            catalog: Arc::new(Catalog::default()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    /// Request events for today and `days` days back, sorted by timestamp.
    pub fn request_events(
        &self,
        days: i64,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<RequestEvent>, SynthError> {
        self.request_events_at(self.clock.now(), days, rng)
    }

    /// [`request_events`](Self::request_events) anchored on a reading the
    /// caller already took, so its day buckets line up with the events.
    pub fn request_events_at(
        &self,
        now: DateTime<FixedOffset>,
        days: i64,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<RequestEvent>, SynthError> {
        let days = ensure_window("days", days)?;
        let events = requests::generate(days, now, &self.catalog, rng);
        crate::metrics::record_generation("requests", events.len());
        Ok(events)
    }

    /// One snapshot per catalog model.
    pub fn model_performance(&self, rng: &mut dyn RandomSource) -> Vec<ModelPerformanceSnapshot> {
        let snapshots = models::generate(&self.catalog, rng);
        crate::metrics::record_generation("models", snapshots.len());
        snapshots
    }

    /// One snapshot per roster user.
    pub fn user_activity(&self, rng: &mut dyn RandomSource) -> Vec<UserActivitySnapshot> {
        let snapshots = users::generate(self.clock.now(), &self.catalog, rng);
        crate::metrics::record_generation("users", snapshots.len());
        snapshots
    }

    /// `hours + 1` hourly snapshots, oldest first, the last one at "now".
    pub fn system_metrics(
        &self,
        hours: i64,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<SystemMetricsSnapshot>, SynthError> {
        let hours = ensure_window("hours", hours)?;
        let snapshots = system::generate(hours, self.clock.now(), rng);
        crate::metrics::record_generation("system", snapshots.len());
        Ok(snapshots)
    }

    /// A single live reading for the sliding-window feed.
    pub fn live_system_snapshot(&self, rng: &mut dyn RandomSource) -> SystemMetricsSnapshot {
        system::live_snapshot(self.clock.now(), rng)
    }

    /// `days + 1` daily rows, oldest first.
    pub fn conversation_metrics(
        &self,
        days: i64,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<ConversationMetric>, SynthError> {
        let days = ensure_window("days", days)?;
        let rows = conversations::generate(days, self.clock.now(), rng);
        crate::metrics::record_generation("conversations", rows.len());
        Ok(rows)
    }

    /// One row per catalog genre.
    pub fn web_automation(&self, rng: &mut dyn RandomSource) -> Vec<WebAutomationMetric> {
        let rows = automation::generate(&self.catalog, rng);
        crate::metrics::record_generation("automation", rows.len());
        rows
    }
}
