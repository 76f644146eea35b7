//! Structured logging setup
//!
//! Turns [`LoggingConfig`](crate::config::LoggingConfig) into a
//! `tracing-subscriber` filter and installs the pretty or JSON formatter.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives for the configured levels.
///
/// The base level comes first, then one `athena::<component>=<level>` entry
/// per override in component-name order.
///
/// ```
/// use athena::config::logging::LoggingConfig;
/// use athena::logging::build_filter_directives;
///
/// let mut config = LoggingConfig::default();
/// config.component_levels.insert("synth".to_string(), "debug".to_string());
///
/// assert_eq!(build_filter_directives(&config), "info,athena::synth=debug");
/// ```
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    config
        .component_levels
        .iter()
        .fold(config.level.clone(), |mut directives, (component, level)| {
            directives.push_str(&format!(",athena::{}={}", component, level));
            directives
        })
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(config)));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_ansi(config.ansi),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_base_level_only() {
        let config = LoggingConfig::default();
        assert_eq!(build_filter_directives(&config), "info");
    }

    #[test]
    fn test_filter_components_sorted() {
        let mut config = LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        };
        config
            .component_levels
            .insert("synth".to_string(), "trace".to_string());
        config
            .component_levels
            .insert("dashboard".to_string(), "debug".to_string());

        assert_eq!(
            build_filter_directives(&config),
            "warn,athena::dashboard=debug,athena::synth=trace"
        );
    }
}
