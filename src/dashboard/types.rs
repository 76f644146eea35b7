//! Type definitions for live dashboard messages

use serde::{Deserialize, Serialize};

/// WebSocket update message sent to dashboard clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketUpdate {
    /// Type of update
    pub update_type: UpdateType,
    /// JSON payload for the update
    pub data: serde_json::Value,
}

/// Type of WebSocket update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum UpdateType {
    /// A new live system snapshot was appended
    SystemMetrics,
    /// The live window was re-seeded from history
    FeedReset,
}
