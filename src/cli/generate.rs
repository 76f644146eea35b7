//! Generate command implementation

use crate::cli::output;
use crate::cli::{Dataset, GenerateArgs};
use crate::config::AthenaConfig;
use crate::synth::{Clock, FixedClock, RngSource, Synthesizer, SystemClock};
use serde::Serialize;
use std::sync::Arc;

/// Configuration from `--config`, or defaults.
fn load_config(args: &GenerateArgs) -> Result<AthenaConfig, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => AthenaConfig::load(Some(path))?,
        None => AthenaConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn clock(args: &GenerateArgs) -> Result<Arc<dyn Clock>, Box<dyn std::error::Error>> {
    match &args.now {
        Some(now) => {
            let fixed = FixedClock::parse(now)
                .map_err(|e| format!("Invalid --now timestamp '{}': {}", now, e))?;
            Ok(Arc::new(fixed))
        }
        None => Ok(Arc::new(SystemClock)),
    }
}

fn render<T: Serialize>(
    args: &GenerateArgs,
    mut rows: Vec<T>,
    table: impl Fn(&[T]) -> String,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }
    if args.json {
        Ok(output::format_json(args.dataset.name(), &rows)?)
    } else {
        Ok(table(&rows))
    }
}

/// Handle `athena generate` command; returns the text to print.
pub fn handle_generate(args: &GenerateArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    let synth = Synthesizer::new(clock(args)?, config.catalog.clone())?;
    let mut rng = RngSource::from_optional_seed(args.seed.or(config.generation.seed));
    let generation = &config.generation;

    tracing::debug!(dataset = args.dataset.name(), seed = ?args.seed, "Generating dataset");

    match args.dataset {
        Dataset::Requests => {
            let days = args.days.unwrap_or(generation.request_days);
            render(
                args,
                synth.request_events(days, &mut rng)?,
                output::format_requests_table,
            )
        }
        Dataset::Models => render(
            args,
            synth.model_performance(&mut rng),
            output::format_models_table,
        ),
        Dataset::Users => render(args, synth.user_activity(&mut rng), output::format_users_table),
        Dataset::System => {
            let hours = args.hours.unwrap_or(generation.system_hours);
            render(args, synth.system_metrics(hours, &mut rng)?, |rows| {
                output::format_system_table(rows, &config.thresholds)
            })
        }
        Dataset::Conversations => {
            let days = args.days.unwrap_or(generation.conversation_days);
            render(
                args,
                synth.conversation_metrics(days, &mut rng)?,
                output::format_conversations_table,
            )
        }
        Dataset::Automation => render(
            args,
            synth.web_automation(&mut rng),
            output::format_automation_table,
        ),
    }
}
