//! # Aggregation
//!
//! Pure functions turning generated collections into chart-ready series and
//! summary figures. None of them mutate their input, and all of them accept
//! empty collections, returning zeros or empty results.
//!
//! - [`buckets`] - per-day and per-hour slots
//! - [`category`] - first-occurrence ordered counts
//! - [`rates`] - guarded ratios, means and the p95 stand-in
//! - [`rank`] - stable top-K and user tiers
//! - [`status`] - warning/critical classification

pub mod buckets;
pub mod category;
pub mod rank;
pub mod rates;
pub mod status;

pub use buckets::{
    count_by_day, count_by_hour, hour_labels, last_n_days, mean_by_hour, sum_by_day,
    weekday_labels,
};
pub use category::{count_by, CategoryCounts};
pub use rank::{segment_users, top_k_by, UserSegments};
pub use rates::{approx_p95, mean, mean_by, percent, ratio, success_rate};
pub use status::{HealthLevel, Thresholds};
