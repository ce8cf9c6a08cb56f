//! Configuration schema types
//!
//! The configuration file is a flat JSON object; this module maps it onto
//! [`ExporterConfig`] and validates it.

use crate::domain::{Result, TimeWindow};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::PathBuf;

/// Main svcdeps configuration
///
/// Loaded once at startup and never modified afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct ExporterConfig {
    /// URL of the GraphQL monitoring endpoint
    pub graphql_endpoint: String,

    /// Credential sent verbatim in the `Authorization` header
    /// Stored securely in memory and redacted from debug output
    pub bearer_token: SecretString,

    /// Start of the query window, in the format the endpoint expects
    pub start_time: String,

    /// End of the query window, in the format the endpoint expects
    pub end_time: String,

    /// Destination CSV file (truncated on every run)
    pub output_csv: PathBuf,

    /// Log file, opened in append mode
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.graphql_endpoint.is_empty() {
            return Err("graphql_endpoint cannot be empty".to_string());
        }

        let endpoint = url::Url::parse(&self.graphql_endpoint)
            .map_err(|e| format!("graphql_endpoint is not a valid URL: {e}"))?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err("graphql_endpoint must start with http:// or https://".to_string());
        }

        if self.bearer_token.expose_secret().trim().is_empty() {
            return Err("bearer_token cannot be empty".to_string());
        }

        if self.start_time.trim().is_empty() {
            return Err("start_time cannot be empty".to_string());
        }

        if self.end_time.trim().is_empty() {
            return Err("end_time cannot be empty".to_string());
        }

        if self.output_csv.as_os_str().is_empty() {
            return Err("output_csv cannot be empty".to_string());
        }

        if self.log_file.as_os_str().is_empty() {
            return Err("log_file cannot be empty".to_string());
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        Ok(())
    }

    /// The `[start_time, end_time]` window to query
    pub fn time_window(&self) -> Result<TimeWindow> {
        TimeWindow::new(self.start_time.clone(), self.end_time.clone())
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("service_dependency.log")
}

fn default_log_level() -> String {
    "info".to_string()
}
