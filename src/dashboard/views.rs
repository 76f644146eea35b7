//! # Tab views
//!
//! One serializable view per dashboard tab, built from generated datasets by
//! the functions in [`crate::aggregate`]. Builders are pure: the HTTP layer
//! generates the data and hands it over.
//!
//! Series are label/value pairs ready for a chart; percentages are already
//! scaled to 0..100.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::aggregate::{
    approx_p95, count_by, count_by_day, count_by_hour, hour_labels, last_n_days, mean_by,
    mean_by_hour, percent, segment_users, success_rate, sum_by_day, top_k_by, weekday_labels,
    CategoryCounts, HealthLevel, UserSegments,
};
use crate::config::ThresholdConfig;
use crate::synth::{
    ConversationMetric, ModelPerformanceSnapshot, RequestEvent, SystemMetricsSnapshot,
    UserActivitySnapshot, WebAutomationMetric,
};

/// Chart-ready series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<T> {
    pub labels: Vec<String>,
    pub values: Vec<T>,
}

impl<T> Series<T> {
    pub fn new(labels: Vec<String>, values: Vec<T>) -> Self {
        debug_assert_eq!(labels.len(), values.len());
        Self { labels, values }
    }
}

/// Main dashboard tab
#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub total_requests: usize,
    pub success_rate: f64,
    pub total_tokens: u64,
    pub avg_response_time_ms: f64,
    pub daily_requests: Series<u64>,
    pub hourly_requests: Series<u64>,
    pub model_distribution: CategoryCounts,
    pub automation: Vec<WebAutomationMetric>,
}

pub fn overview(
    now: DateTime<FixedOffset>,
    events: &[RequestEvent],
    automation: Vec<WebAutomationMetric>,
    trend_days: usize,
) -> OverviewView {
    let days = last_n_days(now, trend_days);

    OverviewView {
        total_requests: events.len(),
        success_rate: success_rate(events) * 100.0,
        total_tokens: events.iter().map(RequestEvent::total_tokens).sum(),
        avg_response_time_ms: mean_by(events, |e| f64::from(e.response_time_ms)),
        daily_requests: Series::new(weekday_labels(&days), count_by_day(&days, events)),
        hourly_requests: Series::new(hour_labels(), count_by_hour(events).to_vec()),
        model_distribution: count_by(events, |e| e.model.as_str()),
        automation,
    }
}

/// Radar chart axes, in order.
pub const RADAR_AXES: [&str; 5] = ["Accuracy", "Precision", "Recall", "Speed", "Requests"];

/// Models plotted on the radar chart.
pub const RADAR_MODELS: usize = 3;

/// One model's radar polygon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarScores {
    pub name: String,
    pub scores: [f64; 5],
}

/// Radar scores for the first [`RADAR_MODELS`] models.
///
/// Speed is `100 - avg_response_time_ms / 30`; requests are relative to the
/// busiest model across the whole list (0 when every count is zero).
pub fn radar_scores(models: &[ModelPerformanceSnapshot]) -> Vec<RadarScores> {
    let busiest = models.iter().map(|m| m.request_count).max().unwrap_or(0);

    models
        .iter()
        .take(RADAR_MODELS)
        .map(|m| RadarScores {
            name: m.name.clone(),
            scores: [
                m.accuracy * 100.0,
                m.precision * 100.0,
                m.recall * 100.0,
                100.0 - f64::from(m.avg_response_time_ms) / 30.0,
                percent(u64::from(m.request_count), u64::from(busiest)),
            ],
        })
        .collect()
}

/// Per-model figures with quality metrics as percentages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRow {
    pub name: String,
    pub accuracy_pct: f64,
    pub precision_pct: f64,
    pub recall_pct: f64,
    pub request_count: u32,
    pub avg_response_time_ms: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelPerformanceView {
    pub models: Vec<ModelRow>,
    pub response_times: Series<u32>,
    pub radar_axes: [&'static str; 5],
    pub radar: Vec<RadarScores>,
    pub best_model: Option<String>,
}

pub fn model_performance(models: &[ModelPerformanceSnapshot]) -> ModelPerformanceView {
    let rows = models
        .iter()
        .map(|m| ModelRow {
            name: m.name.clone(),
            accuracy_pct: m.accuracy * 100.0,
            precision_pct: m.precision * 100.0,
            recall_pct: m.recall * 100.0,
            request_count: m.request_count,
            avg_response_time_ms: m.avg_response_time_ms,
        })
        .collect();

    ModelPerformanceView {
        models: rows,
        response_times: Series::new(
            models.iter().map(|m| m.name.clone()).collect(),
            models.iter().map(|m| m.avg_response_time_ms).collect(),
        ),
        radar_axes: RADAR_AXES,
        radar: radar_scores(models),
        best_model: top_k_by(models, 1, |m| m.accuracy)
            .into_iter()
            .next()
            .map(|m| m.name),
    }
}

/// User behaviour tab
#[derive(Debug, Clone, Serialize)]
pub struct UserBehaviorView {
    pub total_users: usize,
    pub segments: UserSegments,
    pub requests_by_user: Series<u32>,
    pub conversation_depth: Series<f64>,
    /// Engagement on the depth chart's scale (score × 10)
    pub engagement: Series<f64>,
    pub avg_depth: f64,
    pub avg_session_minutes: u64,
    pub avg_engagement_pct: f64,
    pub top_users: Vec<UserActivitySnapshot>,
}

pub fn user_behavior(
    users: &[UserActivitySnapshot],
    conversations: &[ConversationMetric],
    top_users: usize,
) -> UserBehaviorView {
    let day_labels: Vec<String> = conversations
        .iter()
        .map(|c| c.date.format("%b %-d").to_string())
        .collect();

    let avg_session_secs = mean_by(users, |u| f64::from(u.avg_session_time_secs));

    UserBehaviorView {
        total_users: users.len(),
        segments: segment_users(users),
        requests_by_user: Series::new(
            users.iter().map(|u| u.user_name.clone()).collect(),
            users.iter().map(|u| u.total_requests).collect(),
        ),
        conversation_depth: Series::new(
            day_labels.clone(),
            conversations.iter().map(|c| c.avg_depth).collect(),
        ),
        engagement: Series::new(
            day_labels,
            conversations.iter().map(|c| c.engagement_score * 10.0).collect(),
        ),
        avg_depth: mean_by(conversations, |c| c.avg_depth),
        avg_session_minutes: (avg_session_secs / 60.0).round() as u64,
        avg_engagement_pct: mean_by(conversations, |c| c.engagement_score) * 100.0,
        top_users: top_k_by(users, top_users, |u| u.total_requests),
    }
}

/// Request analytics tab
#[derive(Debug, Clone, Serialize)]
pub struct RequestAnalyticsView {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub success_rate: f64,
    pub total_tokens: u64,
    pub avg_tokens_per_request: f64,
    pub avg_response_time_ms: f64,
    /// `avg_response_time_ms × 1.5`; not a measured quantile
    pub approx_p95_response_time_ms: f64,
    pub inference_types: CategoryCounts,
    pub hourly_response_time: Series<f64>,
    pub daily_tokens: Series<u64>,
    /// Earliest failures, oldest first
    pub recent_errors: Vec<RequestEvent>,
}

pub fn request_analytics(
    now: DateTime<FixedOffset>,
    events: &[RequestEvent],
    trend_days: usize,
    error_sample: usize,
) -> RequestAnalyticsView {
    let days = last_n_days(now, trend_days);
    let successful = events.iter().filter(|e| e.success).count();
    let total_tokens: u64 = events.iter().map(RequestEvent::total_tokens).sum();
    let avg_response = mean_by(events, |e| f64::from(e.response_time_ms));

    RequestAnalyticsView {
        total_requests: events.len(),
        successful_requests: successful,
        failed_requests: events.len() - successful,
        success_rate: success_rate(events) * 100.0,
        total_tokens,
        avg_tokens_per_request: mean_by(events, |e| e.total_tokens() as f64),
        avg_response_time_ms: avg_response,
        approx_p95_response_time_ms: approx_p95(avg_response),
        inference_types: count_by(events, |e| e.inference_type.as_str()),
        hourly_response_time: Series::new(
            hour_labels(),
            mean_by_hour(events, |e| f64::from(e.response_time_ms)).to_vec(),
        ),
        daily_tokens: Series::new(
            weekday_labels(&days),
            sum_by_day(&days, events, RequestEvent::total_tokens),
        ),
        recent_errors: events
            .iter()
            .filter(|e| !e.success)
            .take(error_sample)
            .cloned()
            .collect(),
    }
}

/// Health level of each resource in the latest reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceHealth {
    pub cpu: HealthLevel,
    pub memory: HealthLevel,
    pub disk: HealthLevel,
}

impl ResourceHealth {
    pub fn classify(snapshot: &SystemMetricsSnapshot, thresholds: &ThresholdConfig) -> Self {
        Self {
            cpu: HealthLevel::classify(snapshot.cpu_usage, thresholds.cpu),
            memory: HealthLevel::classify(snapshot.memory_usage, thresholds.memory),
            disk: HealthLevel::classify(snapshot.disk_usage, thresholds.disk),
        }
    }

    /// The most severe of the three levels.
    pub fn overall(&self) -> HealthLevel {
        self.cpu.max(self.memory).max(self.disk)
    }
}

/// Parallel per-resource series over the live window
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SystemSeries {
    pub labels: Vec<String>,
    pub cpu_usage: Vec<f64>,
    pub memory_usage: Vec<f64>,
    pub disk_usage: Vec<f64>,
    pub active_connections: Vec<u64>,
    pub queue_size: Vec<u64>,
}

/// System health tab
#[derive(Debug, Clone, Serialize)]
pub struct SystemHealthView {
    pub current: Option<SystemMetricsSnapshot>,
    pub health: Option<ResourceHealth>,
    pub series: SystemSeries,
}

pub fn system_health(
    window: &[SystemMetricsSnapshot],
    thresholds: &ThresholdConfig,
) -> SystemHealthView {
    let current = window.last().cloned();
    let health = current
        .as_ref()
        .map(|s| ResourceHealth::classify(s, thresholds));

    let series = window
        .iter()
        .fold(SystemSeries::default(), |mut series, s| {
            series.labels.push(s.timestamp.format("%H:%M:%S").to_string());
            series.cpu_usage.push(s.cpu_usage);
            series.memory_usage.push(s.memory_usage);
            series.disk_usage.push(s.disk_usage);
            series.active_connections.push(s.active_connections);
            series.queue_size.push(s.queue_size);
            series
        });

    SystemHealthView {
        current,
        health,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2026-10-19T12:00:00+00:00").unwrap()
    }

    fn event(hours_ago: i64, model: &str, success: bool, response_ms: u32) -> RequestEvent {
        RequestEvent {
            id: format!("req_{}", hours_ago),
            timestamp: now() - Duration::hours(hours_ago),
            model: model.to_string(),
            tokens_in: 100,
            tokens_out: 50,
            response_time_ms: response_ms,
            user_id: "user_1".to_string(),
            success,
            inference_type: "translation".to_string(),
        }
    }

    fn model(name: &str, accuracy: f64, requests: u32, avg_ms: u32) -> ModelPerformanceSnapshot {
        ModelPerformanceSnapshot {
            name: name.to_string(),
            accuracy,
            precision: 0.9,
            recall: 0.8,
            request_count: requests,
            avg_response_time_ms: avg_ms,
        }
    }

    fn user(id: usize, requests: u32, session_secs: u32) -> UserActivitySnapshot {
        UserActivitySnapshot {
            user_id: format!("user_{}", id),
            user_name: format!("User {}", id),
            total_requests: requests,
            total_tokens: 10_000,
            avg_session_time_secs: session_secs,
            last_active: now(),
        }
    }

    fn reading(cpu: f64, memory: f64, disk: f64) -> SystemMetricsSnapshot {
        SystemMetricsSnapshot {
            timestamp: now(),
            cpu_usage: cpu,
            memory_usage: memory,
            disk_usage: disk,
            active_connections: 180,
            queue_size: 4,
        }
    }

    #[test]
    fn test_overview_empty_is_all_zero() {
        let view = overview(now(), &[], vec![], 7);
        assert_eq!(view.total_requests, 0);
        assert_eq!(view.success_rate, 0.0);
        assert_eq!(view.avg_response_time_ms, 0.0);
        assert_eq!(view.daily_requests.values, vec![0; 7]);
        assert_eq!(view.hourly_requests.values, vec![0; 24]);
        assert!(view.model_distribution.is_empty());
    }

    #[test]
    fn test_overview_figures() {
        let events = vec![
            event(48, "A", true, 1000),
            event(2, "B", false, 2000),
            event(1, "A", true, 3000),
        ];
        let view = overview(now(), &events, vec![], 7);

        assert_eq!(view.total_requests, 3);
        assert!((view.success_rate - 66.666).abs() < 0.01);
        assert_eq!(view.total_tokens, 450);
        assert_eq!(view.avg_response_time_ms, 2000.0);
        assert_eq!(view.daily_requests.labels.last().unwrap(), "Mon");
        assert_eq!(view.daily_requests.values, vec![0, 0, 0, 0, 1, 0, 2]);
        assert_eq!(view.hourly_requests.values[10], 1);
        assert_eq!(view.hourly_requests.values[11], 1);
        assert_eq!(view.hourly_requests.values[12], 1);
        assert_eq!(view.model_distribution.get("A"), Some(2));
        assert_eq!(view.model_distribution.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_radar_scores() {
        let models = vec![
            model("A", 0.9, 5000, 600),
            model("B", 0.95, 10000, 300),
            model("C", 0.88, 2500, 1500),
            model("D", 0.99, 1000, 900),
        ];
        let radar = radar_scores(&models);

        assert_eq!(radar.len(), 3);
        assert_eq!(radar[0].name, "A");
        assert!((radar[0].scores[0] - 90.0).abs() < 1e-9);
        assert!((radar[0].scores[3] - 80.0).abs() < 1e-9);
        assert!((radar[0].scores[4] - 50.0).abs() < 1e-9);
        assert!((radar[1].scores[4] - 100.0).abs() < 1e-9);
        assert!((radar[2].scores[3] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_radar_zero_requests_guarded() {
        let radar = radar_scores(&[model("A", 0.9, 0, 300)]);
        assert_eq!(radar[0].scores[4], 0.0);
    }

    #[test]
    fn test_model_performance_best_model() {
        let models = vec![model("A", 0.9, 1, 1), model("B", 0.97, 1, 1), model("C", 0.97, 1, 1)];
        let view = model_performance(&models);
        assert_eq!(view.best_model.as_deref(), Some("B"));
        assert_eq!(view.models.len(), 3);
        assert!((view.models[0].accuracy_pct - 90.0).abs() < 1e-9);
        assert!(model_performance(&[]).best_model.is_none());
    }

    #[test]
    fn test_user_behavior() {
        let users = vec![
            user(1, 500, 600),
            user(2, 2500, 1200),
            user(3, 1200, 1800),
            user(4, 2500, 300),
        ];
        let conversations = vec![
            ConversationMetric {
                date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
                avg_depth: 4.0,
                engagement_score: 0.7,
                completion_rate: 0.8,
            },
            ConversationMetric {
                date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
                avg_depth: 6.0,
                engagement_score: 0.9,
                completion_rate: 0.9,
            },
        ];

        let view = user_behavior(&users, &conversations, 2);

        assert_eq!(view.total_users, 4);
        assert_eq!(
            view.segments,
            UserSegments {
                heavy: 2,
                moderate: 1,
                light: 1
            }
        );
        assert_eq!(view.avg_depth, 5.0);
        assert_eq!(view.avg_session_minutes, 16);
        assert!((view.avg_engagement_pct - 80.0).abs() < 1e-9);
        assert_eq!(view.conversation_depth.labels, vec!["Oct 18", "Oct 19"]);
        assert!((view.engagement.values[1] - 9.0).abs() < 1e-9);
        let top: Vec<_> = view.top_users.iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(top, vec!["user_2", "user_4"]);
    }

    #[test]
    fn test_user_behavior_empty() {
        let view = user_behavior(&[], &[], 5);
        assert_eq!(view.avg_depth, 0.0);
        assert_eq!(view.avg_session_minutes, 0);
        assert!(view.top_users.is_empty());
    }

    #[test]
    fn test_request_analytics() {
        let events = vec![
            event(30, "A", false, 1000),
            event(20, "A", true, 2000),
            event(3, "B", false, 3000),
            event(2, "B", false, 1000),
        ];
        let view = request_analytics(now(), &events, 7, 2);

        assert_eq!(view.total_requests, 4);
        assert_eq!(view.successful_requests, 1);
        assert_eq!(view.failed_requests, 3);
        assert_eq!(view.success_rate, 25.0);
        assert_eq!(view.total_tokens, 600);
        assert_eq!(view.avg_tokens_per_request, 150.0);
        assert_eq!(view.avg_response_time_ms, 1750.0);
        assert_eq!(view.approx_p95_response_time_ms, 2625.0);
        assert_eq!(view.inference_types.get("translation"), Some(4));
        assert_eq!(view.hourly_response_time.values[10], 1000.0);
        assert_eq!(view.hourly_response_time.values[0], 0.0);
        assert_eq!(view.daily_tokens.values[6], 300);
        assert_eq!(view.daily_tokens.values[5], 300);
        let errors: Vec<_> = view.recent_errors.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(errors, vec!["req_30", "req_3"]);
    }

    #[test]
    fn test_resource_health_levels() {
        let thresholds = ThresholdConfig::default();
        let health = ResourceHealth::classify(&reading(92.0, 80.0, 70.0), &thresholds);
        assert_eq!(health.cpu, HealthLevel::Critical);
        assert_eq!(health.memory, HealthLevel::Warning);
        assert_eq!(health.disk, HealthLevel::Normal);
        assert_eq!(health.overall(), HealthLevel::Critical);
    }

    #[test]
    fn test_system_health_series() {
        let window = vec![reading(40.0, 50.0, 60.0), reading(75.0, 60.0, 65.0)];
        let view = system_health(&window, &ThresholdConfig::default());

        assert_eq!(view.current.as_ref().unwrap().cpu_usage, 75.0);
        assert_eq!(view.health.unwrap().cpu, HealthLevel::Warning);
        assert_eq!(view.series.cpu_usage, vec![40.0, 75.0]);
        assert_eq!(view.series.labels, vec!["12:00:00", "12:00:00"]);
        assert_eq!(view.series.queue_size, vec![4, 4]);
    }

    #[test]
    fn test_system_health_empty_window() {
        let view = system_health(&[], &ThresholdConfig::default());
        assert!(view.current.is_none());
        assert!(view.health.is_none());
        assert!(view.series.labels.is_empty());
    }
}
