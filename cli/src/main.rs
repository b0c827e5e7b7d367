//! CLI entrypoint for Cardio Quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use cardio_application::SubmitAssessment;
use cardio_infrastructure::{ConfigLoader, HttpPredictionGateway};
use cardio_presentation::{Cli, ConsoleFormatter, OutputFormat, TuiApp, WizardState, parse_field_arg};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Cardio Quorum");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.service.base_url.clone());

    // === Dependency Injection ===
    // Create infrastructure adapter (prediction service gateway)
    let gateway = Arc::new(
        HttpPredictionGateway::new(&base_url, config.service.timeout())
            .context("Failed to build HTTP client")?,
    );
    let use_case = SubmitAssessment::new(gateway);

    if cli.models {
        let models = use_case
            .list_models()
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;
        if !cli.quiet {
            println!("Models available at {}:", base_url);
        }
        for model in models {
            println!("  {}", model);
        }
        return Ok(());
    }

    // One-shot mode: defaults plus --field overrides, no wizard
    if cli.no_tui {
        let mut wizard = WizardState::new();
        for arg in &cli.field {
            let (id, value) = parse_field_arg(arg)?;
            if !wizard.set_field(id, &value) {
                anyhow::bail!("Invalid value for field '{}': {}", id.wire_name(), value);
            }
        }

        if !cli.quiet {
            println!();
            println!("Submitting record ({}% complete) to {}", wizard.completion_percentage(), base_url);
            println!();
        }

        let result = match use_case.execute(wizard.record).await {
            Ok(result) => result,
            Err(error) => {
                eprintln!("{}", ConsoleFormatter::format_error(&error.user_message()));
                std::process::exit(1);
            }
        };

        let output = match cli.output {
            OutputFormat::Full => ConsoleFormatter::format(&result),
            OutputFormat::Consensus => ConsoleFormatter::format_consensus_only(&result),
            OutputFormat::Json => ConsoleFormatter::format_json(&result),
        };
        println!("{}", output);
        return Ok(());
    }

    // Probe the service before taking over the terminal; an unreachable
    // service still opens the wizard, submission will surface the error.
    if let Err(error) = use_case.check_health().await {
        warn!("Prediction service health check failed: {}", error.user_message());
    }

    // Interactive wizard
    let mut app = TuiApp::new(use_case)
        .with_flash_duration(config.tui.flash_duration())
        .with_completion_gauge(config.tui.show_completion);
    app.run().await?;

    Ok(())
}
