//! Top-K selection and user segmentation

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::synth::UserActivitySnapshot;

/// The `k` items with the highest `key`, descending.
///
/// The sort is stable, so equal keys keep their original relative order.
/// Incomparable keys (NaN) are treated as equal.
pub fn top_k_by<T: Clone, K: PartialOrd>(items: &[T], k: usize, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(k).cloned().collect()
}

/// Request-volume threshold above which a user is "heavy".
pub const HEAVY_USER_REQUESTS: u32 = 2000;
/// Request-volume threshold at or below which a user is "light".
pub const LIGHT_USER_REQUESTS: u32 = 500;

/// User counts per activity tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSegments {
    /// More than 2000 requests
    pub heavy: usize,
    /// 501 ..= 2000 requests
    pub moderate: usize,
    /// 500 or fewer
    pub light: usize,
}

pub fn segment_users(users: &[UserActivitySnapshot]) -> UserSegments {
    users
        .iter()
        .fold(UserSegments::default(), |mut segments, user| {
            match user.total_requests {
                r if r > HEAVY_USER_REQUESTS => segments.heavy += 1,
                r if r > LIGHT_USER_REQUESTS => segments.moderate += 1,
                _ => segments.light += 1,
            }
            segments
        })
}
