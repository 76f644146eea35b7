//! Athena - Synthetic LLM usage analytics
//!
//! This library generates plausible LLM-gateway telemetry (request events,
//! model quality, user activity, host health, conversation quality and web
//! automation outcomes), aggregates it into chart-ready series and serves one
//! JSON view per dashboard tab, plus a live system-metrics feed.

pub mod aggregate;
pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod metrics;
pub mod synth;
