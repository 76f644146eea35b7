//! Integration tests for the dashboard API

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use athena::synth::Clock;
use chrono::{DateTime, Duration, FixedOffset};
use common::{
    body_json, body_string, get, login, make_app, make_app_with_clock, post, test_config,
};
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tower::Service;

/// Moves one day forward on every reading.
struct DayStepClock {
    start: DateTime<FixedOffset>,
    readings: AtomicI64,
}

impl Clock for DayStepClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let n = self.readings.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::days(n)
    }
}

fn day_step_app() -> axum::Router {
    let mut config = test_config();
    config.auth.enabled = false;
    let clock = DayStepClock {
        start: DateTime::parse_from_rfc3339(common::NOW).unwrap(),
        readings: AtomicI64::new(0),
    };
    make_app_with_clock(config, Arc::new(clock))
}

#[tokio::test]
async fn test_health_is_open() {
    let (mut app, _) = make_app(test_config());

    let response = app.call(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["live_feed_size"], 25);
    assert_eq!(json["active_sessions"], 0);
}

#[tokio::test]
async fn test_views_require_session() {
    let (mut app, _) = make_app(test_config());

    for uri in ["/api/overview", "/api/models", "/api/users", "/api/requests", "/api/system"] {
        let response = app.call(get(uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }

    let response = app.call(get("/api/models", Some("bogus"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"]["type"], "authentication_error");
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let (mut app, state) = make_app(test_config());

    let response = app
        .call(post(
            "/api/login",
            None,
            json!({"email": common::DEMO_EMAIL, "password": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn test_login_returns_profile() {
    let (mut app, _) = make_app(test_config());

    let response = app
        .call(post(
            "/api/login",
            None,
            json!({"email": common::DEMO_EMAIL, "password": common::DEMO_PASSWORD}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Alex Chen");
    assert_eq!(json["user"]["role"], "Administrator");
    assert_eq!(json["token"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let (mut app, _) = make_app(test_config());
    let token = login(&mut app).await;

    let response = app
        .call(post("/api/logout", Some(&token), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.call(get("/api/models", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_overview_view() {
    let (mut app, _) = make_app(test_config());
    let token = login(&mut app).await;

    let response = app
        .call(get("/api/overview?days=7", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let total = json["total_requests"].as_u64().unwrap();
    assert!(total > 0);
    assert_eq!(json["daily_requests"]["values"].as_array().unwrap().len(), 7);
    assert_eq!(json["daily_requests"]["labels"][6], "Mon");
    assert_eq!(json["hourly_requests"]["values"].as_array().unwrap().len(), 24);

    let hourly: u64 = json["hourly_requests"]["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(hourly, total);

    let distributed: u64 = json["model_distribution"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(distributed, total);
    assert_eq!(json["automation"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_negative_window_is_bad_request() {
    let (mut app, _) = make_app(test_config());
    let token = login(&mut app).await;

    let response = app
        .call(get("/api/requests?days=-1", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["param"], "days");
    assert_eq!(json["error"]["code"], "invalid_request_error");
}

#[tokio::test]
async fn test_malformed_window_uses_error_envelope() {
    let (mut app, _) = make_app(test_config());
    let token = login(&mut app).await;

    let response = app
        .call(get("/api/overview?days=abc", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["type"], "invalid_request_error");
    assert!(json["error"]["message"].as_str().unwrap().contains("days"));
}

#[tokio::test]
async fn test_malformed_login_body_uses_error_envelope() {
    let (mut app, state) = make_app(test_config());

    let request = Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("content-type", "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();
    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "invalid_request_error");
    assert!(state.sessions.is_empty());

    let response = app
        .call(post("/api/login", None, json!({"email": common::DEMO_EMAIL})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn test_models_view() {
    let (mut app, _) = make_app(test_config());
    let token = login(&mut app).await;

    let response = app.call(get("/api/models", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["models"].as_array().unwrap().len(), 8);
    assert_eq!(json["models"][0]["name"], "GPT-4");
    assert_eq!(json["radar"].as_array().unwrap().len(), 3);
    assert_eq!(json["radar_axes"][3], "Speed");
    assert!(json["best_model"].is_string());
}

#[tokio::test]
async fn test_users_view() {
    let (mut app, _) = make_app(test_config());
    let token = login(&mut app).await;

    let response = app
        .call(get("/api/users?days=13", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_users"], 12);
    assert_eq!(json["conversation_depth"]["values"].as_array().unwrap().len(), 14);

    let top = json["top_users"].as_array().unwrap();
    assert_eq!(top.len(), 5);
    let requests: Vec<u64> = top
        .iter()
        .map(|u| u["total_requests"].as_u64().unwrap())
        .collect();
    assert!(requests.windows(2).all(|w| w[0] >= w[1]));

    let segments = &json["segments"];
    let segmented = segments["heavy"].as_u64().unwrap()
        + segments["moderate"].as_u64().unwrap()
        + segments["light"].as_u64().unwrap();
    assert_eq!(segmented, 12);
}

#[tokio::test]
async fn test_requests_view() {
    let (mut app, _) = make_app(test_config());
    let token = login(&mut app).await;

    let response = app
        .call(get("/api/requests?days=30", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let total = json["total_requests"].as_u64().unwrap();
    let ok = json["successful_requests"].as_u64().unwrap();
    let failed = json["failed_requests"].as_u64().unwrap();
    assert_eq!(ok + failed, total);

    let avg = json["avg_response_time_ms"].as_f64().unwrap();
    let p95 = json["approx_p95_response_time_ms"].as_f64().unwrap();
    assert!((p95 - avg * 1.5).abs() < 1e-6);

    let errors = json["recent_errors"].as_array().unwrap();
    assert!(errors.len() <= 10);
    assert!(errors.iter().all(|e| e["success"] == false));
    assert_eq!(json["daily_tokens"]["values"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_overview_buckets_share_the_generation_reading() {
    let mut app = day_step_app();

    let json = body_json(app.call(get("/api/overview?days=6", None)).await.unwrap()).await;
    let bucketed: u64 = json["daily_requests"]["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(bucketed, json["total_requests"].as_u64().unwrap());
}

#[tokio::test]
async fn test_request_buckets_share_the_generation_reading() {
    let mut app = day_step_app();

    let json = body_json(app.call(get("/api/requests?days=6", None)).await.unwrap()).await;
    let daily = json["daily_tokens"]["values"].as_array().unwrap();
    assert_eq!(daily.len(), 7);
    assert!(daily.iter().all(|v| v.as_u64().unwrap() > 0));
}

#[tokio::test]
async fn test_seeded_views_repeat() {
    let (mut app, _) = make_app(test_config());
    let token = login(&mut app).await;

    let first = body_string(app.call(get("/api/overview", Some(&token))).await.unwrap()).await;
    let second = body_string(app.call(get("/api/overview", Some(&token))).await.unwrap()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_system_view_reflects_live_window() {
    let (mut app, state) = make_app(test_config());
    let token = login(&mut app).await;

    let response = app.call(get("/api/system", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["series"]["cpu_usage"].as_array().unwrap().len(), 25);
    assert!(json["health"]["cpu"].is_string());

    let mut rng = athena::synth::RngSource::seeded(9);
    let live = state.live_feed.tick(&state.synth, &mut rng);

    let json = body_json(app.call(get("/api/system", Some(&token))).await.unwrap()).await;
    assert_eq!(json["series"]["cpu_usage"].as_array().unwrap().len(), 25);
    let current = json["current"]["cpu_usage"].as_f64().unwrap();
    assert!((current - live.cpu_usage).abs() < 1e-9);
}

#[tokio::test]
async fn test_system_reset_resizes_window() {
    let (mut app, state) = make_app(test_config());
    let token = login(&mut app).await;

    let response = app
        .call(post("/api/system/reset?hours=5", Some(&token), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.live_feed.len(), 6);

    let response = app
        .call(post("/api/system/reset?hours=-2", Some(&token), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.live_feed.len(), 6);
}

#[tokio::test]
async fn test_auth_disabled_opens_views() {
    let mut config = test_config();
    config.auth.enabled = false;
    let (mut app, _) = make_app(config);

    let response = app.call(get("/api/models", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_endpoint_returns_text() {
    let (mut app, _) = make_app(test_config());

    let response = app.call(get("/metrics", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn test_websocket_without_upgradable_connection_is_426() {
    let (mut app, _) = make_app(test_config());

    let request = Request::builder()
        .uri("/ws")
        .header("Upgrade", "websocket")
        .header("Connection", "Upgrade")
        .header("Sec-WebSocket-Key", "dGhlIHNhbXBsZSBub25jZQ==")
        .header("Sec-WebSocket-Version", "13")
        .body(Body::empty())
        .unwrap();

    // Headers are valid, but an in-process call carries no hyper upgrade handle
    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UPGRADE_REQUIRED);
}

#[tokio::test]
async fn test_websocket_plain_get_is_rejected() {
    let (mut app, _) = make_app(test_config());

    let response = app.call(get("/ws", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UPGRADE_REQUIRED);

    let response = app.call(post("/ws", None, json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (mut app, _) = make_app(test_config());
    let response = app.call(get("/api/weather", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
