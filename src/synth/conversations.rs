//! Daily conversation quality metrics

use chrono::{DateTime, Duration, FixedOffset};

use super::source::RandomSource;
use super::types::ConversationMetric;

pub(crate) fn generate(
    days: u32,
    now: DateTime<FixedOffset>,
    rng: &mut dyn RandomSource,
) -> Vec<ConversationMetric> {
    (0..=i64::from(days))
        .rev()
        .map(|i| ConversationMetric {
            date: (now - Duration::days(i)).date_naive(),
            avg_depth: rng.between(3.0, 10.0),
            engagement_score: rng.between(0.6, 1.0),
            completion_rate: rng.between(0.7, 0.99),
        })
        .collect()
}
