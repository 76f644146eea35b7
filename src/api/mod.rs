//! # Dashboard API
//!
//! JSON endpoints behind the dashboard tabs, the demo sign-in, a live
//! system-metrics WebSocket and Prometheus metrics.
//!
//! ## Endpoints
//!
//! - `GET /health` - Liveness, uptime and live window size
//! - `POST /api/login`, `POST /api/logout` - Demo session handling
//! - `GET /api/overview?days=` - Main dashboard tab
//! - `GET /api/models` - Model performance tab
//! - `GET /api/users?days=` - User behaviour tab
//! - `GET /api/requests?days=` - Request analytics tab
//! - `GET /api/system` - System health tab (live window)
//! - `POST /api/system/reset?hours=` - Re-seed the live window
//! - `GET /ws` - Live system snapshots
//! - `GET /metrics` - Prometheus text format
//!
//! View endpoints need `Authorization: Bearer <token>` unless `auth.enabled`
//! is false.
//!
//! ## Example
//!
//! ```no_run
//! use athena::api::{create_router, AppState};
//! use athena::config::AthenaConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(AthenaConfig::default());
//! let state = Arc::new(AppState::new(config)?);
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Errors share one envelope:
//! ```json
//! {
//!   "error": {
//!     "message": "Invalid value for 'days': must be zero or positive, got -1",
//!     "type": "invalid_request_error",
//!     "param": "days",
//!     "code": "invalid_request_error"
//!   }
//! }
//! ```

mod health;
mod session;
pub mod types;

pub use types::*;

use crate::auth::SessionStore;
use crate::config::AthenaConfig;
use crate::dashboard::{self, LiveFeed, WebSocketUpdate};
use crate::metrics::MetricsCollector;
use crate::synth::{Clock, RngSource, SynthError, Synthesizer, SystemClock};
use axum::{
    routing::{get, post},
    Router,
};
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (64 KB); only login bodies are accepted.
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Buffered live updates per WebSocket subscriber.
const WS_CHANNEL_CAPACITY: usize = 64;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub config: Arc<AthenaConfig>,
    pub synth: Synthesizer,
    pub sessions: SessionStore,
    /// Sliding window behind the system tab
    pub live_feed: Arc<LiveFeed>,
    /// Fan-out for live updates to WebSocket clients
    pub ws_broadcast: broadcast::Sender<WebSocketUpdate>,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
    /// Metrics collector for observability
    pub metrics_collector: Arc<MetricsCollector>,
}

impl AppState {
    /// State on the wall clock.
    pub fn new(config: Arc<AthenaConfig>) -> Result<Self, SynthError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// State on an arbitrary clock; the live window is seeded from
    /// `generation.system_hours` of history.
    pub fn with_clock(
        config: Arc<AthenaConfig>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, SynthError> {
        let synth = Synthesizer::new(clock, config.catalog.clone())?;

        let mut rng = RngSource::from_optional_seed(config.generation.seed);
        let history = synth.system_metrics(config.generation.system_hours, &mut rng)?;
        let live_feed = Arc::new(LiveFeed::seeded(history));

        let (ws_broadcast, _) = broadcast::channel(WS_CHANNEL_CAPACITY);

        let start_time = Instant::now();

        // Initialize metrics (safe to call multiple times - will reuse existing if already set)
        let prometheus_handle = crate::metrics::setup_metrics().unwrap_or_else(|e| {
            tracing::debug!("Metrics already initialized, creating new handle: {}", e);
            crate::metrics::PrometheusBuilder::new()
                .build_recorder()
                .handle()
        });
        let metrics_collector = Arc::new(MetricsCollector::new(start_time, prometheus_handle));

        Ok(Self {
            sessions: SessionStore::new(config.auth.clone()),
            config,
            synth,
            live_feed,
            ws_broadcast,
            start_time,
            metrics_collector,
        })
    }

    /// Fresh random source for one request; seeded runs repeat exactly.
    pub fn rng(&self) -> RngSource<StdRng> {
        RngSource::from_optional_seed(self.config.generation.seed)
    }
}

/// Create the main API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let server = &state.config.server;
    let cors = if server.cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };
    let timeout = Duration::from_secs(server.request_timeout_seconds);

    Router::new()
        .route("/health", get(health::handle))
        .route("/api/login", post(session::login))
        .route("/api/logout", post(session::logout))
        .route("/api/overview", get(dashboard::handler::overview_handler))
        .route("/api/models", get(dashboard::handler::models_handler))
        .route("/api/users", get(dashboard::handler::users_handler))
        .route("/api/requests", get(dashboard::handler::requests_handler))
        .route("/api/system", get(dashboard::handler::system_handler))
        .route(
            "/api/system/reset",
            post(dashboard::handler::system_reset_handler),
        )
        .route("/ws", get(dashboard::websocket_handler))
        .route("/metrics", get(crate::metrics::handler::metrics_handler))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
