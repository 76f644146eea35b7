//! Health check endpoint handler.

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub live_feed_size: usize,
    pub active_sessions: usize,
}

/// GET /health - Return service status. Never requires a session.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.metrics_collector.uptime_seconds(),
        live_feed_size: state.live_feed.len(),
        active_sessions: state.sessions.len(),
    })
}
