//! Generated record types
//!
//! All records are immutable value types; none carries identity beyond the
//! opaque request id.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single simulated inference request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEvent {
    /// Opaque id, `req_<millis>_<suffix>`
    pub id: String,
    pub timestamp: DateTime<FixedOffset>,
    pub model: String,
    pub tokens_in: u32,
    pub tokens_out: u32,
    pub response_time_ms: u32,
    /// Roster reference (`user_N`), not checked against the roster
    pub user_id: String,
    pub success: bool,
    pub inference_type: String,
}

impl RequestEvent {
    /// Prompt plus completion tokens.
    pub fn total_tokens(&self) -> u64 {
        u64::from(self.tokens_in) + u64::from(self.tokens_out)
    }
}

/// Quality and load figures for one catalog model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformanceSnapshot {
    pub name: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub request_count: u32,
    pub avg_response_time_ms: u32,
}

/// Usage summary for one roster user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivitySnapshot {
    pub user_id: String,
    pub user_name: String,
    pub total_requests: u32,
    pub total_tokens: u32,
    pub avg_session_time_secs: u32,
    pub last_active: DateTime<FixedOffset>,
}

/// Host resource usage for one hour slot (or one live tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetricsSnapshot {
    pub timestamp: DateTime<FixedOffset>,
    /// Percent, capped at 95
    pub cpu_usage: f64,
    /// Percent, capped at 90
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub active_connections: u64,
    pub queue_size: u64,
}

/// Conversation quality for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMetric {
    pub date: NaiveDate,
    /// Turns per conversation
    pub avg_depth: f64,
    pub engagement_score: f64,
    pub completion_rate: f64,
}

/// Web automation outcome for one task genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebAutomationMetric {
    pub genre: String,
    pub requests: u32,
    pub success_rate: f64,
    pub avg_duration_ms: u32,
}

/// Records that carry a point in time, for time bucketing.
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<FixedOffset>;
}

impl Timestamped for RequestEvent {
    fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }
}

impl Timestamped for SystemMetricsSnapshot {
    fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }
}
