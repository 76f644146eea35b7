//! Demo sign-in and sign-out handlers.

use crate::api::{ApiError, AppState, LoginRequest, LoginResponse};
use crate::auth::bearer_token;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use std::sync::Arc;
use std::time::Duration;

/// POST /api/login - Exchange the demo credentials for a session token.
///
/// Waits `auth.login_delay_ms` before checking credentials, successful or
/// not. A malformed body is rejected straight away.
pub async fn login(
    State(state): State<Arc<AppState>>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = request?;
    tokio::time::sleep(Duration::from_millis(state.config.auth.login_delay_ms)).await;

    let session = state
        .sessions
        .authenticate(&request.email, &request.password)?;

    Ok(Json(LoginResponse {
        token: session.token,
        user: session.user,
    }))
}

/// POST /api/logout - Close the caller's session. Idempotent.
pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        if state.sessions.logout(token) {
            tracing::info!("Session closed");
        }
    }
    StatusCode::NO_CONTENT
}
