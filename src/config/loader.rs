//! Configuration loader with JSON parsing and environment variable overrides

use super::schema::ExporterConfig;
use crate::domain::errors::ExporterError;
use crate::domain::result::Result;
use regex::{Captures, Regex};
use secrecy::SecretString;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a JSON file
///
/// This function:
/// 1. Reads the JSON file
/// 2. Performs environment variable substitution (${VAR} syntax) in string values
/// 3. Maps the JSON object onto ExporterConfig
/// 4. Applies environment variable overrides (SVCDEPS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - JSON parsing fails or a required key is missing
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use svcdeps::config::loader::load_config;
///
/// let config = load_config("config.json").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExporterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExporterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut raw: Value = serde_json::from_str(&contents)
        .map_err(|e| ExporterError::Configuration(format!("Failed to parse JSON: {e}")))?;

    substitute_env_vars(&mut raw)?;

    let mut config: ExporterConfig = serde_json::from_value(raw)
        .map_err(|e| ExporterError::Configuration(format!("Invalid configuration: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ExporterError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Only string values are rewritten, so a substituted value can never change
/// the shape of the document.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(value: &mut Value) -> Result<()> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExporterError::Configuration(e.to_string()))?;
    let mut missing_vars = Vec::new();

    substitute_value(value, &re, &mut missing_vars);

    if !missing_vars.is_empty() {
        return Err(ExporterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(())
}

fn substitute_value(value: &mut Value, re: &Regex, missing_vars: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            if !re.is_match(s.as_str()) {
                return;
            }
            let replaced = re.replace_all(s.as_str(), |cap: &Captures| match std::env::var(&cap[1]) {
                Ok(val) => val,
                Err(_) => {
                    if !missing_vars.iter().any(|m| m == &cap[1]) {
                        missing_vars.push(cap[1].to_string());
                    }
                    cap[0].to_string()
                }
            });
            *s = replaced.into_owned();
        }
        Value::Array(items) => {
            for item in items {
                substitute_value(item, re, missing_vars);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                substitute_value(item, re, missing_vars);
            }
        }
        _ => {}
    }
}

/// Applies environment variable overrides using SVCDEPS_* prefix
///
/// For example: SVCDEPS_BEARER_TOKEN, SVCDEPS_START_TIME
fn apply_env_overrides(config: &mut ExporterConfig) {
    if let Ok(val) = std::env::var("SVCDEPS_GRAPHQL_ENDPOINT") {
        config.graphql_endpoint = val;
    }
    if let Ok(val) = std::env::var("SVCDEPS_BEARER_TOKEN") {
        config.bearer_token = SecretString::new(val);
    }
    if let Ok(val) = std::env::var("SVCDEPS_START_TIME") {
        config.start_time = val;
    }
    if let Ok(val) = std::env::var("SVCDEPS_END_TIME") {
        config.end_time = val;
    }
    if let Ok(val) = std::env::var("SVCDEPS_OUTPUT_CSV") {
        config.output_csv = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("SVCDEPS_LOG_FILE") {
        config.log_file = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("SVCDEPS_LOG_LEVEL") {
        config.log_level = val;
    }
}
