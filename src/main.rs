// svcdeps - Service Dependency Exporter
// Copyright (c) 2025 svcdeps Contributors
// Licensed under the MIT License

use anyhow::Context;
use clap::Parser;
use std::process;
use svcdeps::cli::Cli;
use svcdeps::config::{load_config, ExporterConfig};
use svcdeps::core::export::{ExportCoordinator, Stage};
use svcdeps::log_stage_failure;
use svcdeps::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging is configured from the file, so a bad file is reported on stderr only
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let exit_code = match run(config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };

    process::exit(exit_code);
}

/// Run one export; the logging guard is dropped, and the log flushed, on return
async fn run(config: ExporterConfig) -> anyhow::Result<i32> {
    let _guard = init_logging(&config.log_level, &config.log_file)
        .context("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "svcdeps - Service Dependency Exporter"
    );

    let coordinator = match ExportCoordinator::new(config) {
        Ok(coordinator) => coordinator,
        Err(e) => {
            log_stage_failure!(Stage::LoadConfig, &e);
            return Ok(0);
        }
    };

    // Stage failures are already logged by the coordinator
    if let Ok(summary) = coordinator.execute_export().await {
        tracing::debug!(
            services = summary.total_services,
            busiest = ?summary.busiest_service,
            "Run finished"
        );
    }

    Ok(0)
}
