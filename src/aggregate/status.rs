//! Resource health classification

use serde::{Deserialize, Serialize};

/// Severity of a resource reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    Normal,
    Warning,
    Critical,
}

/// Warning/critical cut-offs for one resource, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Thresholds {
    pub const fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }
}

impl HealthLevel {
    /// Critical at or above `critical`, warning at or above `warning`.
    pub fn classify(value: f64, thresholds: Thresholds) -> Self {
        if value >= thresholds.critical {
            HealthLevel::Critical
        } else if value >= thresholds.warning {
            HealthLevel::Warning
        } else {
            HealthLevel::Normal
        }
    }
}
