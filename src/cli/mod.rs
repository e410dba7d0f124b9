//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for catalog-ingest using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Catalog Ingest - SQS to DynamoDB product ingestion
#[derive(Parser, Debug)]
#[command(name = "catalog-ingest")]
#[command(version, about, long_about = None)]
#[command(author = "Catalog Ingest Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "catalog-ingest.toml", env = "CATALOG_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CATALOG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute; runs the Lambda handler when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the SQS Lambda handler
    Lambda(commands::lambda::LambdaArgs),

    /// Process a local SQS event or product list file
    Process(commands::process::ProcessArgs),

    /// Print one product with its stock count
    Get(commands::get::GetArgs),

    /// Print all products with their stock counts
    List(commands::list::ListArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
