//! Time bucketing: calendar-day and hour-of-day slots

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};
use std::collections::HashMap;

use crate::synth::Timestamped;

/// Slots in an hour-of-day profile.
pub const HOURS_PER_DAY: usize = 24;

/// The last `n` calendar days ending with today, oldest first.
///
/// Stops early at the earliest representable date.
pub fn last_n_days(now: DateTime<FixedOffset>, n: usize) -> Vec<NaiveDate> {
    let today = now.date_naive();
    let mut days: Vec<NaiveDate> = std::iter::successors(Some(today), NaiveDate::pred_opt)
        .take(n)
        .collect();
    days.reverse();
    days
}

/// Short weekday names ("Mon", "Tue", ...) for day labels.
pub fn weekday_labels(days: &[NaiveDate]) -> Vec<String> {
    days.iter().map(|d| d.weekday().to_string()).collect()
}

/// Sum `value` over the records falling on each day; parallel to `days`.
///
/// Matching is by calendar date in each record's own offset; records outside
/// the listed days are ignored.
pub fn sum_by_day<T: Timestamped>(
    days: &[NaiveDate],
    records: &[T],
    value: impl Fn(&T) -> u64,
) -> Vec<u64> {
    let slots: HashMap<NaiveDate, usize> = days.iter().enumerate().map(|(i, d)| (*d, i)).collect();
    let mut sums = vec![0; days.len()];

    for record in records {
        if let Some(&slot) = slots.get(&record.timestamp().date_naive()) {
            sums[slot] += value(record);
        }
    }

    sums
}

/// Number of records falling on each day; parallel to `days`.
pub fn count_by_day<T: Timestamped>(days: &[NaiveDate], records: &[T]) -> Vec<u64> {
    sum_by_day(days, records, |_| 1)
}

/// Records per hour of day, folded across every day in the input.
pub fn count_by_hour<T: Timestamped>(records: &[T]) -> [u64; HOURS_PER_DAY] {
    let mut counts = [0; HOURS_PER_DAY];
    for record in records {
        counts[record.timestamp().hour() as usize] += 1;
    }
    counts
}

/// Mean of `value` per hour of day; hours without records are 0.
pub fn mean_by_hour<T: Timestamped>(
    records: &[T],
    value: impl Fn(&T) -> f64,
) -> [f64; HOURS_PER_DAY] {
    let mut sums = [0.0; HOURS_PER_DAY];
    let mut counts = [0u64; HOURS_PER_DAY];

    for record in records {
        let hour = record.timestamp().hour() as usize;
        sums[hour] += value(record);
        counts[hour] += 1;
    }

    let mut means = [0.0; HOURS_PER_DAY];
    for hour in 0..HOURS_PER_DAY {
        if counts[hour] > 0 {
            means[hour] = sums[hour] / counts[hour] as f64;
        }
    }
    means
}

/// Labels "0:00" .. "23:00" for hourly profiles.
pub fn hour_labels() -> Vec<String> {
    (0..HOURS_PER_DAY).map(|h| format!("{}:00", h)).collect()
}
