//! HTTP handlers for the dashboard tabs
//!
//! Each handler checks the session, waits the configured per-view delay,
//! generates fresh data and hands it to the matching view builder.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use std::sync::Arc;

use crate::api::{ApiError, AppState, WindowQuery};
use crate::config::View;
use crate::dashboard::types::{UpdateType, WebSocketUpdate};
use crate::dashboard::views::{
    self, ModelPerformanceView, OverviewView, RequestAnalyticsView, SystemHealthView,
    UserBehaviorView,
};

/// Session check plus simulated latency; shared by every view.
async fn prepare(state: &AppState, headers: &HeaderMap, view: View) -> Result<(), ApiError> {
    state.sessions.authorize(headers)?;
    let delay = state.config.latency.delay_for(view);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    Ok(())
}

/// GET /api/overview?days=
pub async fn overview_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    window: Result<Query<WindowQuery>, QueryRejection>,
) -> Result<Json<OverviewView>, ApiError> {
    prepare(&state, &headers, View::Overview).await?;
    let Query(window) = window?;

    let generation = &state.config.generation;
    let now = state.synth.now();
    let mut rng = state.rng();
    let days = window.days.unwrap_or(generation.request_days);
    let events = state.synth.request_events_at(now, days, &mut rng)?;
    let automation = state.synth.web_automation(&mut rng);

    tracing::debug!(view = "overview", events = events.len(), "View generated");
    Ok(Json(views::overview(now, &events, automation, generation.trend_days)))
}

/// GET /api/models
pub async fn models_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ModelPerformanceView>, ApiError> {
    prepare(&state, &headers, View::Models).await?;

    let models = state.synth.model_performance(&mut state.rng());

    tracing::debug!(view = "models", models = models.len(), "View generated");
    Ok(Json(views::model_performance(&models)))
}

/// GET /api/users?days=
pub async fn users_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    window: Result<Query<WindowQuery>, QueryRejection>,
) -> Result<Json<UserBehaviorView>, ApiError> {
    prepare(&state, &headers, View::Users).await?;
    let Query(window) = window?;

    let generation = &state.config.generation;
    let mut rng = state.rng();
    let users = state.synth.user_activity(&mut rng);
    let conversations = state
        .synth
        .conversation_metrics(window.days.unwrap_or(generation.conversation_days), &mut rng)?;

    tracing::debug!(
        view = "users",
        users = users.len(),
        days = conversations.len(),
        "View generated"
    );
    Ok(Json(views::user_behavior(
        &users,
        &conversations,
        generation.top_users,
    )))
}

/// GET /api/requests?days=
pub async fn requests_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    window: Result<Query<WindowQuery>, QueryRejection>,
) -> Result<Json<RequestAnalyticsView>, ApiError> {
    prepare(&state, &headers, View::Requests).await?;
    let Query(window) = window?;

    let generation = &state.config.generation;
    let now = state.synth.now();
    let days = window.days.unwrap_or(generation.request_days);
    let events = state.synth.request_events_at(now, days, &mut state.rng())?;

    tracing::debug!(view = "requests", events = events.len(), "View generated");
    Ok(Json(views::request_analytics(
        now,
        &events,
        generation.trend_days,
        generation.error_sample,
    )))
}

/// GET /api/system - the live window as it stands.
pub async fn system_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SystemHealthView>, ApiError> {
    prepare(&state, &headers, View::System).await?;

    let window = state.live_feed.snapshot();
    Ok(Json(views::system_health(&window, &state.config.thresholds)))
}

/// POST /api/system/reset?hours= - replace the live window with fresh history.
pub async fn system_reset_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    window: Result<Query<WindowQuery>, QueryRejection>,
) -> Result<Json<SystemHealthView>, ApiError> {
    state.sessions.authorize(&headers)?;
    let Query(window) = window?;

    let hours = window.hours.unwrap_or(state.config.generation.system_hours);
    let history = state.synth.system_metrics(hours, &mut state.rng())?;
    state.live_feed.reseed(history);
    crate::metrics::set_live_feed_size(state.live_feed.len());

    tracing::info!(hours, window = state.live_feed.len(), "Live window re-seeded");

    let window = state.live_feed.snapshot();
    let view = views::system_health(&window, &state.config.thresholds);
    let _ = state.ws_broadcast.send(WebSocketUpdate {
        update_type: UpdateType::FeedReset,
        data: serde_json::json!({ "size": window.len() }),
    });
    Ok(Json(view))
}
