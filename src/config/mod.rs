//! Configuration module for Athena
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`ATHENA_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use athena::config::AthenaConfig;
//!
//! // Load defaults
//! let config = AthenaConfig::default();
//! assert_eq!(config.server.port, 8000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [server]
//! port = 9000
//!
//! [generation]
//! seed = 7
//! "#;
//! let config: AthenaConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! assert_eq!(config.generation.seed, Some(7));
//! ```

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod generation;
pub mod logging;
pub mod server;

pub use auth::AuthConfig;
pub use dashboard::{LatencyConfig, ThresholdConfig, View};
pub use error::ConfigError;
pub use generation::GenerationConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::synth::error::MAX_WINDOW;
use crate::synth::Catalog;

/// Unified configuration for the Athena dashboard service.
///
/// # Example
///
/// ```rust
/// use athena::config::AthenaConfig;
///
/// let config = AthenaConfig::default();
/// assert_eq!(config.server.host, "0.0.0.0");
/// assert_eq!(config.catalog.models.len(), 8);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AthenaConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Dataset window sizes and live feed cadence
    pub generation: GenerationConfig,
    /// Simulated per-view latency
    pub latency: LatencyConfig,
    /// Health thresholds for the system view
    pub thresholds: ThresholdConfig,
    /// Model, inference type, genre and user catalogs
    pub catalog: Catalog,
    /// Demo sign-in
    pub auth: AuthConfig,
}

impl AthenaConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports ATHENA_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("ATHENA_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("ATHENA_HOST") {
            self.server.host = host;
        }

        if let Ok(level) = std::env::var("ATHENA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ATHENA_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(auth) = std::env::var("ATHENA_AUTH") {
            self.auth.enabled = auth.to_lowercase() == "true";
        }
        if let Ok(seed) = std::env::var("ATHENA_SEED") {
            if let Ok(s) = seed.parse() {
                self.generation.seed = Some(s);
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        let windows = [
            ("generation.request_days", self.generation.request_days),
            ("generation.system_hours", self.generation.system_hours),
            ("generation.conversation_days", self.generation.conversation_days),
        ];
        for (field, value) in windows {
            if !(0..=MAX_WINDOW).contains(&value) {
                return Err(ConfigError::Validation {
                    field: field.to_string(),
                    message: format!("must be between 0 and {}, got {}", MAX_WINDOW, value),
                });
            }
        }

        let trend_days = self.generation.trend_days;
        if trend_days == 0 || trend_days as u64 > MAX_WINDOW as u64 {
            return Err(ConfigError::Validation {
                field: "generation.trend_days".to_string(),
                message: format!("must be between 1 and {}, got {}", MAX_WINDOW, trend_days),
            });
        }

        if self.generation.live_interval_secs == 0 {
            return Err(ConfigError::Validation {
                field: "generation.live_interval_secs".to_string(),
                message: "interval must be non-zero".to_string(),
            });
        }

        for (field, t) in self.thresholds.entries() {
            if t.warning >= t.critical {
                return Err(ConfigError::Validation {
                    field: field.to_string(),
                    message: format!(
                        "warning ({}) must be below critical ({})",
                        t.warning, t.critical
                    ),
                });
            }
        }

        if self.auth.enabled && self.auth.email.is_empty() {
            return Err(ConfigError::Validation {
                field: "auth.email".to_string(),
                message: "email cannot be empty when auth is enabled".to_string(),
            });
        }

        if self.auth.enabled && self.auth.session_ttl_secs == 0 {
            return Err(ConfigError::Validation {
                field: "auth.session_ttl_secs".to_string(),
                message: "sessions must live at least one second".to_string(),
            });
        }

        self.catalog.validate()?;

        Ok(())
    }
}
