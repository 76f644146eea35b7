//! System health snapshots
//!
//! Hourly history is driven by the temporal weighting (base load 50, base
//! connections 200). Disk usage and queue size ignore the time of day.
//! Live ticks use flat ranges with no weighting at all.

use chrono::{DateTime, Duration, FixedOffset};

use super::source::RandomSource;
use super::types::SystemMetricsSnapshot;
use super::weighting::weighted_at;

/// Ceiling for CPU usage percent.
pub const CPU_CEILING: f64 = 95.0;
/// Ceiling for memory usage percent.
pub const MEMORY_CEILING: f64 = 90.0;

const BASE_LOAD: f64 = 50.0;
const BASE_CONNECTIONS: f64 = 200.0;

pub(crate) fn generate(
    hours: u32,
    now: DateTime<FixedOffset>,
    rng: &mut dyn RandomSource,
) -> Vec<SystemMetricsSnapshot> {
    (0..=i64::from(hours))
        .rev()
        .map(|h| {
            let timestamp = now - Duration::hours(h);
            let base_load = weighted_at(BASE_LOAD, &timestamp, rng) as f64;

            SystemMetricsSnapshot {
                timestamp,
                cpu_usage: (base_load + rng.between(0.0, 20.0)).min(CPU_CEILING),
                memory_usage: (base_load + rng.between(0.0, 15.0)).min(MEMORY_CEILING),
                disk_usage: rng.between(60.0, 80.0),
                active_connections: weighted_at(BASE_CONNECTIONS, &timestamp, rng),
                queue_size: rng.below(50),
            }
        })
        .collect()
}

/// One live reading at `now`.
pub(crate) fn live_snapshot(
    now: DateTime<FixedOffset>,
    rng: &mut dyn RandomSource,
) -> SystemMetricsSnapshot {
    SystemMetricsSnapshot {
        timestamp: now,
        cpu_usage: rng.between(30.0, 70.0).min(CPU_CEILING),
        memory_usage: rng.between(40.0, 70.0).min(MEMORY_CEILING),
        disk_usage: rng.between(60.0, 80.0),
        active_connections: rng.between(150.0, 250.0).floor() as u64,
        queue_size: rng.below(20),
    }
}
