//! User activity snapshots, one per roster user

use chrono::{DateTime, Duration, FixedOffset};

use super::catalog::Catalog;
use super::source::RandomSource;
use super::types::UserActivitySnapshot;

/// `last_active` falls within this many trailing days.
pub const ACTIVITY_WINDOW_DAYS: i64 = 7;

pub(crate) fn generate(
    now: DateTime<FixedOffset>,
    catalog: &Catalog,
    rng: &mut dyn RandomSource,
) -> Vec<UserActivitySnapshot> {
    let window_ms = Duration::days(ACTIVITY_WINDOW_DAYS).num_milliseconds() as f64;

    catalog
        .users
        .iter()
        .enumerate()
        .map(|(index, name)| UserActivitySnapshot {
            user_id: Catalog::user_id(index),
            user_name: name.clone(),
            total_requests: 500 + rng.below(5000) as u32,
            total_tokens: 10_000 + rng.below(100_000) as u32,
            avg_session_time_secs: 300 + rng.below(1800) as u32,
            last_active: now - Duration::milliseconds((rng.next_unit() * window_ms) as i64),
        })
        .collect()
}
