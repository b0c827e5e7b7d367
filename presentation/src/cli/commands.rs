//! CLI command definitions

use cardio_domain::{DomainError, FieldId};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assessment results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with per-model breakdown
    Full,
    /// Only the consensus verdict
    Consensus,
    /// JSON output
    Json,
}

/// CLI arguments for cardio-quorum
#[derive(Parser, Debug)]
#[command(name = "cardio-quorum")]
#[command(author, version, about = "Heart disease risk assessment against a multi-model prediction service")]
#[command(long_about = r#"
Cardio Quorum collects a clinical record and submits it to a prediction
service where several machine-learning models vote on heart disease risk.

By default an interactive terminal wizard opens. With --no-tui the record
is built from defaults plus any --field overrides and submitted directly.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./cardio.toml       Project-level config
3. ~/.config/cardio-quorum/config.toml   Global config

Example:
  cardio-quorum
  cardio-quorum --no-tui --field age=61 --field chol=240 --field cp=3
  cardio-quorum --no-tui --output json --base-url http://192.168.1.20:8000
"#)]
pub struct Cli {
    /// Set a clinical field as NAME=VALUE (can be specified multiple times)
    #[arg(short, long, value_name = "NAME=VALUE")]
    pub field: Vec<String>,

    /// Submit once and print the result instead of opening the wizard
    #[arg(long)]
    pub no_tui: bool,

    /// Output format for --no-tui results
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// List the models available on the prediction service and exit
    #[arg(long)]
    pub models: bool,

    /// Override the prediction service base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress headers and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Parse a `--field NAME=VALUE` argument into a field id and raw value.
pub fn parse_field_arg(arg: &str) -> Result<(FieldId, String), DomainError> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| DomainError::InvalidValue {
            field: arg.to_string(),
            value: "expected NAME=VALUE".to_string(),
        })?;
    let id = FieldId::from_wire(name.trim())
        .ok_or_else(|| DomainError::UnknownField(name.trim().to_string()))?;
    Ok((id, value.trim().to_string()))
}
