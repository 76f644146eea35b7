//! Shared test utilities for Athena integration tests.
//!
//! Builds app state on a fixed clock with a fixed seed and no simulated
//! latency, plus small request/response helpers.

#![allow(dead_code)]

use athena::api::{create_router, AppState};
use athena::config::{AthenaConfig, LatencyConfig};
use athena::synth::{Clock, FixedClock};
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use std::sync::Arc;
use tower::Service;

/// Monday noon, UTC.
pub const NOW: &str = "2026-10-19T12:00:00+00:00";

pub const DEMO_EMAIL: &str = "admin@athena-analytics.com";
pub const DEMO_PASSWORD: &str = "admin123";

/// Defaults with a fixed seed, a 24h live window and no delays.
pub fn test_config() -> AthenaConfig {
    let mut config = AthenaConfig::default();
    config.latency = LatencyConfig::none();
    config.auth.login_delay_ms = 0;
    config.generation.seed = Some(42);
    config.generation.system_hours = 24;
    config
}

pub fn make_state(config: AthenaConfig) -> Arc<AppState> {
    let clock = FixedClock::parse(NOW).unwrap();
    Arc::new(AppState::with_clock(Arc::new(config), Arc::new(clock)).unwrap())
}

/// App on an arbitrary clock.
pub fn make_app_with_clock(config: AthenaConfig, clock: Arc<dyn Clock>) -> Router {
    let state = AppState::with_clock(Arc::new(config), clock).unwrap();
    create_router(Arc::new(state))
}

pub fn make_app(config: AthenaConfig) -> (Router, Arc<AppState>) {
    let state = make_state(config);
    (create_router(Arc::clone(&state)), state)
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Sign in with the demo account and return the session token.
pub async fn login(app: &mut Router) -> String {
    let response = app
        .call(post(
            "/api/login",
            None,
            serde_json::json!({"email": DEMO_EMAIL, "password": DEMO_PASSWORD}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}
