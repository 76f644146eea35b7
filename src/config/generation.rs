//! Dataset window sizes and live feed cadence

use serde::{Deserialize, Serialize};

/// Generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Days of request history behind the overview and request views
    pub request_days: i64,
    /// Hours of system history seeding the live window
    pub system_hours: i64,
    /// Days of conversation metrics in the user view
    pub conversation_days: i64,
    /// Days shown in daily trend charts
    pub trend_days: usize,
    /// Rows in the top-users table
    pub top_users: usize,
    /// Failed requests listed in the error table
    pub error_sample: usize,
    /// Seconds between live system-metric ticks
    pub live_interval_secs: u64,
    /// Fixed RNG seed; unset draws fresh entropy per request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            request_days: 30,
            system_hours: 72,
            conversation_days: 30,
            trend_days: 7,
            top_users: 5,
            error_sample: 10,
            live_interval_secs: 5,
            seed: None,
        }
    }
}
