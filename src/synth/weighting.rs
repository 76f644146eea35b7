//! Temporal weighting of base magnitudes
//!
//! Business hours peak, weekends drop, and every value gets ±20% jitter.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use super::source::RandomSource;

/// Multiplier applied between 09:00 and 17:59 inclusive of hour 17.
pub const BUSINESS_HOURS_FACTOR: f64 = 1.5;
/// Multiplier applied on Saturday and Sunday.
pub const WEEKEND_FACTOR: f64 = 0.3;
/// Lower bound of the jitter multiplier.
pub const JITTER_MIN: f64 = 0.8;
/// Upper bound (exclusive) of the jitter multiplier.
pub const JITTER_MAX: f64 = 1.2;

/// Weight `base` by hour of day (0..=23) and day of week (0 = Sunday).
///
/// Consumes exactly one draw for the jitter.
pub fn weighted_value(base: f64, hour: u32, weekday: u32, rng: &mut dyn RandomSource) -> u64 {
    let mut multiplier = 1.0;

    if (9..=17).contains(&hour) {
        multiplier *= BUSINESS_HOURS_FACTOR;
    }

    if weekday == 0 || weekday == 6 {
        multiplier *= WEEKEND_FACTOR;
    }

    multiplier *= rng.between(JITTER_MIN, JITTER_MAX);

    (base * multiplier).round().max(0.0) as u64
}

/// [`weighted_value`] keyed on a timestamp's local hour and weekday.
pub fn weighted_at<Tz: TimeZone>(base: f64, at: &DateTime<Tz>, rng: &mut dyn RandomSource) -> u64 {
    weighted_value(base, at.hour(), at.weekday().num_days_from_sunday(), rng)
}
