//! CLI module for Athena
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `serve` - Start the dashboard API server
//! - `generate` - Print a synthetic dataset as a table or JSON
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with default config
//! athena serve
//!
//! # A reproducible week of request events
//! athena generate requests --days 7 --seed 42 --json
//!
//! # Generate shell completions
//! athena completions bash > ~/.bash_completion.d/athena
//! ```

pub mod completions;
pub mod config;
pub mod generate;
pub mod output;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;
pub use generate::handle_generate;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Athena - Synthetic LLM usage analytics
#[derive(Parser, Debug)]
#[command(
    name = "athena",
    version,
    about = "Synthetic LLM usage analytics dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the dashboard API server
    Serve(ServeArgs),
    /// Generate a synthetic dataset
    Generate(GenerateArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, env = "ATHENA_CONFIG", default_value = "athena.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Fixed RNG seed for reproducible datasets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Serve views without the demo sign-in
    #[arg(long)]
    pub no_auth: bool,

    /// Skip the simulated per-view latency
    #[arg(long)]
    pub no_latency: bool,
}

/// Datasets `athena generate` can produce
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    /// Request events (uses --days)
    Requests,
    /// Per-model performance
    Models,
    /// Per-user activity
    Users,
    /// Hourly system metrics (uses --hours)
    System,
    /// Daily conversation quality (uses --days)
    Conversations,
    /// Web automation outcomes per genre
    Automation,
}

impl Dataset {
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Requests => "requests",
            Dataset::Models => "models",
            Dataset::Users => "users",
            Dataset::System => "system",
            Dataset::Conversations => "conversations",
            Dataset::Automation => "automation",
        }
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Dataset to generate
    #[arg(value_enum)]
    pub dataset: Dataset,

    /// Days of history (requests, conversations)
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Hours of history (system)
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub hours: Option<i64>,

    /// Fixed RNG seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pin "now" to an RFC 3339 timestamp
    #[arg(long)]
    pub now: Option<String>,

    /// Print at most this many records
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file supplying catalog, windows and seed
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "athena.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,

    /// Pin `[generation].seed` so every run produces the same datasets
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
