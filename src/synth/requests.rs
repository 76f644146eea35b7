//! Request event generation
//!
//! Daily volume follows the temporal weighting of a base of 150 requests; each
//! event then gets an independent hour, minute, model, token counts, latency,
//! user and outcome.

use chrono::{DateTime, Duration, FixedOffset, Timelike};

use super::catalog::Catalog;
use super::source::RandomSource;
use super::types::RequestEvent;
use super::weighting::weighted_at;

/// Unweighted requests per day.
pub const DAILY_BASE: f64 = 150.0;
/// Probability threshold; a draw above it is a success (95%).
pub const FAILURE_THRESHOLD: f64 = 0.05;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

pub(crate) fn generate(
    days: u32,
    now: DateTime<FixedOffset>,
    catalog: &Catalog,
    rng: &mut dyn RandomSource,
) -> Vec<RequestEvent> {
    let mut events = Vec::new();

    for d in (0..=i64::from(days)).rev() {
        let day = now - Duration::days(d);
        let volume = weighted_at(DAILY_BASE, &day, rng);
        events.reserve(volume as usize);

        for _ in 0..volume {
            let hour = rng.below(24) as i64;
            let minute = rng.below(60) as i64;
            let timestamp = day + Duration::hours(hour - i64::from(day.hour()))
                + Duration::minutes(minute - i64::from(day.minute()));

            events.push(RequestEvent {
                id: request_id(now, rng),
                timestamp,
                model: catalog.models[rng.index(catalog.models.len())].clone(),
                tokens_in: 100 + rng.below(2000) as u32,
                tokens_out: 50 + rng.below(1500) as u32,
                response_time_ms: 200 + rng.below(3000) as u32,
                user_id: Catalog::user_id(rng.index(catalog.users.len())),
                success: rng.above(FAILURE_THRESHOLD),
                inference_type: catalog.inference_types[rng.index(catalog.inference_types.len())]
                    .clone(),
            });
        }
    }

    // Stable: events sharing a minute keep generation order
    events.sort_by_key(|e| e.timestamp);

    tracing::debug!(days, count = events.len(), "Generated request events");
    events
}

fn request_id(now: DateTime<FixedOffset>, rng: &mut dyn RandomSource) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.index(ID_ALPHABET.len())] as char)
        .collect();
    format!("req_{}_{}", now.timestamp_millis(), suffix)
}
