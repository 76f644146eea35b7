//! Ratios, means and the p95 stand-in
//!
//! Every division here is guarded: an empty denominator yields 0.

use crate::synth::RequestEvent;

/// Multiplier behind [`approx_p95`].
pub const P95_APPROXIMATION_FACTOR: f64 = 1.5;

/// `part / total`, or 0 when `total` is 0.
pub fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64
}

/// [`ratio`] scaled to percent.
pub fn percent(part: u64, total: u64) -> f64 {
    ratio(part, total) * 100.0
}

/// Fraction of successful requests; 0 for no requests.
pub fn success_rate(events: &[RequestEvent]) -> f64 {
    let successes = events.iter().filter(|e| e.success).count() as u64;
    ratio(successes, events.len() as u64)
}

/// Arithmetic mean; 0 for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0u64), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Mean of a numeric field across records.
pub fn mean_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> f64 {
    mean(records.iter().map(value))
}

/// Dashboard stand-in for the 95th percentile: `average × 1.5`.
///
/// This is not a quantile of any distribution; it only scales the mean.
pub fn approx_p95(average: f64) -> f64 {
    average * P95_APPROXIMATION_FACTOR
}
