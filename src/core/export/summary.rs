//! Export summary and reporting

use std::time::Duration;

/// Summary of one export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Number of services received from the endpoint
    pub total_services: usize,

    /// Number of data rows written to the CSV file
    pub rows_written: usize,

    /// Entity id of the service with the most calls, if any
    pub busiest_service: Option<String>,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}
