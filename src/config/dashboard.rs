//! Dashboard view settings: simulated latency and health thresholds

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::aggregate::Thresholds;

/// Artificial delay before each view is served, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub overview_ms: u64,
    pub models_ms: u64,
    pub users_ms: u64,
    pub requests_ms: u64,
    pub system_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            overview_ms: 1000,
            models_ms: 800,
            users_ms: 900,
            requests_ms: 700,
            system_ms: 600,
        }
    }
}

impl LatencyConfig {
    /// No delay anywhere (tests, benchmarks).
    pub fn none() -> Self {
        Self {
            overview_ms: 0,
            models_ms: 0,
            users_ms: 0,
            requests_ms: 0,
            system_ms: 0,
        }
    }
}

/// Which view a delay applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Overview,
    Models,
    Users,
    Requests,
    System,
}

impl LatencyConfig {
    pub fn delay_for(&self, view: View) -> Duration {
        let ms = match view {
            View::Overview => self.overview_ms,
            View::Models => self.models_ms,
            View::Users => self.users_ms,
            View::Requests => self.requests_ms,
            View::System => self.system_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Per-resource health thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub cpu: Thresholds,
    pub memory: Thresholds,
    pub disk: Thresholds,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            cpu: Thresholds::new(70.0, 90.0),
            memory: Thresholds::new(75.0, 90.0),
            disk: Thresholds::new(80.0, 95.0),
        }
    }
}

impl ThresholdConfig {
    pub(crate) fn entries(&self) -> [(&'static str, Thresholds); 3] {
        [
            ("thresholds.cpu", self.cpu),
            ("thresholds.memory", self.memory),
            ("thresholds.disk", self.disk),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_defaults() {
        let latency = LatencyConfig::default();
        assert_eq!(latency.delay_for(View::Overview), Duration::from_millis(1000));
        assert_eq!(latency.delay_for(View::System), Duration::from_millis(600));
        assert_eq!(LatencyConfig::none().delay_for(View::Users), Duration::ZERO);
    }

    #[test]
    fn test_threshold_defaults() {
        let thresholds = ThresholdConfig::default();
        assert_eq!(thresholds.cpu, Thresholds::new(70.0, 90.0));
        assert_eq!(thresholds.memory, Thresholds::new(75.0, 90.0));
        assert_eq!(thresholds.disk, Thresholds::new(80.0, 95.0));
    }

    #[test]
    fn test_threshold_toml() {
        let config: ThresholdConfig =
            toml::from_str("cpu = { warning = 60.0, critical = 80.0 }").unwrap();
        assert_eq!(config.cpu.critical, 80.0);
        assert_eq!(config.disk.warning, 80.0);
    }
}
