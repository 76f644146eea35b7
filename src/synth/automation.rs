//! Web automation metrics, one row per genre

use super::catalog::Catalog;
use super::source::RandomSource;
use super::types::WebAutomationMetric;

pub(crate) fn generate(catalog: &Catalog, rng: &mut dyn RandomSource) -> Vec<WebAutomationMetric> {
    catalog
        .genres
        .iter()
        .map(|genre| WebAutomationMetric {
            genre: genre.clone(),
            requests: 100 + rng.below(1000) as u32,
            success_rate: rng.between(0.85, 0.99),
            avg_duration_ms: 5000 + rng.below(30_000) as u32,
        })
        .collect()
}
