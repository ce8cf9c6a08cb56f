//! Export coordinator - main orchestrator for the export run
//!
//! Runs the pipeline stages in order: fetch the raw result from the GraphQL
//! endpoint, transform it into ranked records, and write the CSV file. The
//! first failing stage is logged and ends the run; no stage is retried and
//! nothing is written once a stage before export has failed.

use crate::adapters::graphql::GraphQlClient;
use crate::config::ExporterConfig;
use crate::core::export::csv_file::export_to_csv;
use crate::core::export::summary::ExportSummary;
use crate::core::transform::transform_entities;
use crate::domain::{ExporterError, Result};
use crate::{log_export_complete, log_stage_failure};
use std::fmt;
use std::time::Instant;

/// Pipeline stage, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Loading and validating configuration, building the client
    LoadConfig,
    /// Querying the GraphQL endpoint
    Fetch,
    /// Flattening and ranking the response
    Transform,
    /// Writing the CSV file
    Export,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::LoadConfig => "load_config",
            Stage::Fetch => "fetch",
            Stage::Transform => "transform",
            Stage::Export => "export",
        };
        f.write_str(name)
    }
}

/// Export coordinator
pub struct ExportCoordinator {
    config: ExporterConfig,
    client: GraphQlClient,
}

impl ExportCoordinator {
    /// Create a new export coordinator
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the GraphQL client cannot be built
    /// from `config`.
    pub fn new(config: ExporterConfig) -> Result<Self> {
        let client = GraphQlClient::from_config(&config)?;
        Ok(Self { config, client })
    }

    /// Execute the export
    ///
    /// 1. Fetches the service dependency result for the configured window
    /// 2. Transforms it into records ranked by call volume
    /// 3. Writes the records to the configured CSV file
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing stage, after logging it.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::info!(
            endpoint = %self.client.endpoint(),
            output_csv = %self.config.output_csv.display(),
            "Starting service dependency export"
        );

        let window = self
            .config
            .time_window()
            .map_err(|e| fail(Stage::LoadConfig, e))?;

        let raw = self
            .client
            .fetch_service_dependencies(&window)
            .await
            .map_err(|e| fail(Stage::Fetch, e))?;

        let records = transform_entities(&raw).map_err(|e| fail(Stage::Transform, e))?;
        summary.total_services = records.len();
        summary.busiest_service = records
            .first()
            .filter(|r| r.calls().is_some())
            .map(|r| r.entity_id.clone());

        summary.rows_written = export_to_csv(&records, &self.config.output_csv)
            .map_err(|e| fail(Stage::Export, e))?;

        let summary = summary.with_duration(start_time.elapsed());
        log_export_complete!(summary.rows_written, summary.duration);

        Ok(summary)
    }
}

/// Every error kind stops the run
fn fail(stage: Stage, error: ExporterError) -> ExporterError {
    log_stage_failure!(stage, &error);
    error
}
