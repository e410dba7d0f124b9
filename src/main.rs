// Catalog Ingest - SQS to DynamoDB product ingestion
// Copyright (c) 2025 Catalog Ingest Contributors
// Licensed under the MIT License

use catalog_ingest::cli::commands::lambda::LambdaArgs;
use catalog_ingest::cli::{Cli, Commands};
use catalog_ingest::config::{load_config_or_env, IngestConfig};
use catalog_ingest::domain::Result;
use catalog_ingest::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging is configured from the file when it loads; a broken file is
    // reported after logging is up
    let loaded = load_config_or_env(&cli.config);
    let logging_config = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    if let Err(e) = init_logging(&log_level, &logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Catalog Ingest - SQS to DynamoDB product ingestion"
    );

    let exit_code = match execute_command(&cli, loaded).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, loaded: Result<IngestConfig>) -> anyhow::Result<i32> {
    match &cli.command {
        Some(Commands::ValidateConfig(args)) => return args.execute(&cli.config).await,
        Some(Commands::Init(args)) => return args.execute().await,
        _ => {}
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, config_path = %cli.config, "Invalid configuration");
            eprintln!("Error: {e}");
            return Ok(2); // Configuration error exit code
        }
    };

    match &cli.command {
        Some(Commands::Process(args)) => args.execute(&config).await,
        Some(Commands::Get(args)) => args.execute(&config).await,
        Some(Commands::List(args)) => args.execute(&config).await,
        Some(Commands::Lambda(args)) => args.execute(&config).await,
        _ => LambdaArgs::default().execute(&config).await,
    }
}
