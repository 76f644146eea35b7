//! # Demo sign-in
//!
//! A single configured account and an in-memory session cache. Tokens are
//! random UUIDs kept in a [`DashMap`] until logout or until they outlive
//! `auth.session_ttl_secs`; nothing is hashed or persisted. This gates the
//! dashboard for demos and is not a security boundary.

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;

/// Id reported for the demo account.
pub const DEMO_USER_ID: &str = "admin_001";

/// Errors that can occur during sign-in or session lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("missing bearer token")]
    MissingToken,

    #[error("unknown or expired session")]
    InvalidToken,
}

/// Signed-in user as shown in the top navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// An active session
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is at least `ttl_secs` old at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl_secs: u64) -> bool {
        let age = u64::try_from((now - self.created_at).num_seconds()).unwrap_or(0);
        age >= ttl_secs
    }
}

/// Session cache keyed by bearer token
pub struct SessionStore {
    config: AuthConfig,
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            sessions: DashMap::new(),
        }
    }

    /// Whether view endpoints require a session.
    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    fn profile(&self) -> UserProfile {
        UserProfile {
            id: DEMO_USER_ID.to_string(),
            name: self.config.display_name.clone(),
            email: self.config.email.clone(),
            role: self.config.role.clone(),
            avatar: self.config.avatar_url.clone(),
        }
    }

    /// Check the demo credentials and open a session.
    ///
    /// Email and password must match exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email != self.config.email || password != self.config.password {
            tracing::info!(email = %email, "Sign-in rejected");
            crate::metrics::record_login("rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let now = Utc::now();
        self.sweep(now);

        let session = Session {
            token: uuid::Uuid::new_v4().to_string(),
            user: self.profile(),
            created_at: now,
        };
        self.sessions.insert(session.token.clone(), session.clone());

        tracing::info!(email = %email, active_sessions = self.sessions.len(), "Sign-in accepted");
        crate::metrics::record_login("success");
        Ok(session)
    }

    /// Look up an open session. Expired sessions are closed on sight.
    pub fn validate(&self, token: &str) -> Result<Session, AuthError> {
        let ttl = self.config.session_ttl_secs;
        let session = self
            .sessions
            .get(token)
            .map(|entry| entry.value().clone())
            .ok_or(AuthError::InvalidToken)?;

        if session.is_expired(Utc::now(), ttl) {
            self.sessions.remove(token);
            tracing::debug!("Expired session rejected");
            return Err(AuthError::InvalidToken);
        }
        Ok(session)
    }

    /// Drop every session that has outlived the TTL; returns how many went.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        let ttl = self.config.session_ttl_secs;
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired(now, ttl));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            tracing::debug!(removed, "Expired sessions swept");
        }
        removed
    }

    /// Close a session. Returns false when the token was not open.
    pub fn logout(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Resolve the request's session, or `None` when sign-in is disabled.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<Option<Session>, AuthError> {
        if !self.enabled() {
            return Ok(None);
        }
        let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
        self.validate(token).map(Some)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
