//! Model performance snapshots, one per catalog model

use super::catalog::Catalog;
use super::source::RandomSource;
use super::types::ModelPerformanceSnapshot;

pub(crate) fn generate(
    catalog: &Catalog,
    rng: &mut dyn RandomSource,
) -> Vec<ModelPerformanceSnapshot> {
    catalog
        .models
        .iter()
        .map(|name| ModelPerformanceSnapshot {
            name: name.clone(),
            accuracy: rng.between(0.85, 0.99),
            precision: rng.between(0.80, 0.99),
            recall: rng.between(0.75, 0.99),
            request_count: 1000 + rng.below(10_000) as u32,
            avg_response_time_ms: 300 + rng.below(2000) as u32,
        })
        .collect()
}
