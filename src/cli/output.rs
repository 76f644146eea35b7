//! Output formatting helpers for CLI commands

use crate::aggregate::HealthLevel;
use crate::config::ThresholdConfig;
use crate::synth::{
    ConversationMetric, ModelPerformanceSnapshot, RequestEvent, SystemMetricsSnapshot,
    UserActivitySnapshot, WebAutomationMetric,
};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn level_cell(value: f64, level: HealthLevel) -> Cell {
    let text = format!("{:.1}%", value);
    Cell::new(match level {
        HealthLevel::Normal => text.green().to_string(),
        HealthLevel::Warning => text.yellow().to_string(),
        HealthLevel::Critical => text.red().to_string(),
    })
}

/// Wrap generated records as `{"<dataset>": [...]}`
pub fn format_json<T: Serialize>(dataset: &str, rows: &[T]) -> Result<String, serde_json::Error> {
    let mut body = serde_json::Map::new();
    body.insert(dataset.to_string(), serde_json::to_value(rows)?);
    serde_json::to_string_pretty(&body)
}

/// Format request events as a table
pub fn format_requests_table(events: &[RequestEvent]) -> String {
    let mut table = new_table(vec![
        "Time", "Model", "Type", "User", "Tokens In", "Tokens Out", "Latency", "Status",
    ]);

    for e in events {
        let status = if e.success {
            "OK".green().to_string()
        } else {
            "FAILED".red().to_string()
        };
        table.add_row(vec![
            Cell::new(e.timestamp.format("%Y-%m-%d %H:%M")),
            Cell::new(&e.model),
            Cell::new(&e.inference_type),
            Cell::new(&e.user_id),
            Cell::new(e.tokens_in),
            Cell::new(e.tokens_out),
            Cell::new(format!("{}ms", e.response_time_ms)),
            Cell::new(status),
        ]);
    }

    table.to_string()
}

/// Format model snapshots as a table
pub fn format_models_table(models: &[ModelPerformanceSnapshot]) -> String {
    let mut table = new_table(vec![
        "Model", "Accuracy", "Precision", "Recall", "Requests", "Avg Time",
    ]);

    for m in models {
        table.add_row(vec![
            Cell::new(&m.name),
            Cell::new(pct(m.accuracy)),
            Cell::new(pct(m.precision)),
            Cell::new(pct(m.recall)),
            Cell::new(m.request_count),
            Cell::new(format!("{}ms", m.avg_response_time_ms)),
        ]);
    }

    table.to_string()
}

/// Format user snapshots as a table
pub fn format_users_table(users: &[UserActivitySnapshot]) -> String {
    let mut table = new_table(vec![
        "User", "Name", "Requests", "Tokens", "Avg Session", "Last Active",
    ]);

    for u in users {
        table.add_row(vec![
            Cell::new(&u.user_id),
            Cell::new(&u.user_name),
            Cell::new(u.total_requests),
            Cell::new(format!("{}K", u.total_tokens / 1000)),
            Cell::new(format!("{}m", (f64::from(u.avg_session_time_secs) / 60.0).round())),
            Cell::new(u.last_active.format("%Y-%m-%d %H:%M")),
        ]);
    }

    table.to_string()
}

/// Format system snapshots as a table, colouring readings by health level
pub fn format_system_table(
    snapshots: &[SystemMetricsSnapshot],
    thresholds: &ThresholdConfig,
) -> String {
    let mut table = new_table(vec!["Time", "CPU", "Memory", "Disk", "Connections", "Queue"]);

    for s in snapshots {
        table.add_row(vec![
            Cell::new(s.timestamp.format("%Y-%m-%d %H:%M")),
            level_cell(s.cpu_usage, HealthLevel::classify(s.cpu_usage, thresholds.cpu)),
            level_cell(
                s.memory_usage,
                HealthLevel::classify(s.memory_usage, thresholds.memory),
            ),
            level_cell(s.disk_usage, HealthLevel::classify(s.disk_usage, thresholds.disk)),
            Cell::new(s.active_connections),
            Cell::new(s.queue_size),
        ]);
    }

    table.to_string()
}

/// Format conversation rows as a table
pub fn format_conversations_table(rows: &[ConversationMetric]) -> String {
    let mut table = new_table(vec!["Date", "Avg Depth", "Engagement", "Completion"]);

    for r in rows {
        table.add_row(vec![
            Cell::new(r.date),
            Cell::new(format!("{:.1}", r.avg_depth)),
            Cell::new(pct(r.engagement_score)),
            Cell::new(pct(r.completion_rate)),
        ]);
    }

    table.to_string()
}

/// Format web automation rows as a table
pub fn format_automation_table(rows: &[WebAutomationMetric]) -> String {
    let mut table = new_table(vec!["Genre", "Requests", "Success Rate", "Avg Duration"]);

    for r in rows {
        table.add_row(vec![
            Cell::new(&r.genre),
            Cell::new(r.requests),
            Cell::new(pct(r.success_rate)),
            Cell::new(format!("{:.1}s", f64::from(r.avg_duration_ms) / 1000.0)),
        ]);
    }

    table.to_string()
}
