//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::{AthenaConfig, LatencyConfig};
use crate::dashboard::LiveTicker;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<AthenaConfig, Box<dyn std::error::Error>> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        AthenaConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        AthenaConfig::default()
    };

    config = config.with_env_overrides();

    // CLI overrides (highest priority)
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    if let Some(seed) = args.seed {
        config.generation.seed = Some(seed);
    }
    if args.no_auth {
        config.auth.enabled = false;
    }
    if args.no_latency {
        config.latency = LatencyConfig::none();
        config.auth.login_delay_ms = 0;
    }

    Ok(config)
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for CTRL+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    cancel_token.cancel();
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load, merge and validate configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Initialize tracing
    crate::logging::init_tracing(&config.logging)?;

    tracing::info!("Starting Athena server");
    tracing::debug!(?config, "Loaded configuration");
    if !config.auth.enabled {
        tracing::warn!("Demo sign-in disabled; views are open");
    }

    // 3. Build state (seeds the live window) and router
    let config = Arc::new(config);
    let app_state = Arc::new(AppState::new(Arc::clone(&config))?);
    let app = create_router(Arc::clone(&app_state));

    // 4. Start the live ticker
    let cancel_token = CancellationToken::new();
    let ticker_handle = LiveTicker::new(
        Arc::clone(&app_state.live_feed),
        app_state.synth.clone(),
        Duration::from_secs(config.generation.live_interval_secs),
    )
    .with_seed(config.generation.seed)
    .with_broadcast(app_state.ws_broadcast.clone())
    .start(cancel_token.clone());

    // 5. Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(addr = %addr, "Athena API server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token.clone()))
        .await?;

    // 6. Cleanup
    cancel_token.cancel();
    tracing::info!("Waiting for live ticker to stop");
    ticker_handle.await?;

    tracing::info!("Athena server stopped");
    Ok(())
}
