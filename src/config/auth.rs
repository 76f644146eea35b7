//! Demo login configuration
//!
//! A single demo account gates the dashboard. This is a mock sign-in for the
//! synthetic dashboard, not an authentication system.

use serde::{Deserialize, Serialize};

/// Demo account and session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Require a session token on view endpoints
    pub enabled: bool,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Simulated sign-in latency
    pub login_delay_ms: u64,
    /// Sessions older than this are dropped
    pub session_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            email: "admin@athena-analytics.com".to_string(),
            password: "admin123".to_string(),
            display_name: "Alex Chen".to_string(),
            role: "Administrator".to_string(),
            avatar_url: None,
            login_delay_ms: 1500,
            session_ttl_secs: 8 * 60 * 60,
        }
    }
}
