//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX to avoid
//! interference between tests.

use secrecy::ExposeSecret;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use svcdeps::config::load_config;
use svcdeps::domain::ExporterError;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in [
        "SVCDEPS_GRAPHQL_ENDPOINT",
        "SVCDEPS_BEARER_TOKEN",
        "SVCDEPS_START_TIME",
        "SVCDEPS_END_TIME",
        "SVCDEPS_OUTPUT_CSV",
        "SVCDEPS_LOG_FILE",
        "SVCDEPS_LOG_LEVEL",
        "TEST_MONITORING_TOKEN",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

const COMPLETE_CONFIG: &str = r#"{
    "graphql_endpoint": "https://monitoring.example.com/graphql",
    "bearer_token": "Bearer abc123",
    "start_time": "2024-06-01T00:00:00.000Z",
    "end_time": "2024-06-02T00:00:00.000Z",
    "output_csv": "reports/services.csv",
    "log_file": "logs/svcdeps.log",
    "log_level": "debug"
}"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    let temp_file = write_config(COMPLETE_CONFIG);

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(
        config.graphql_endpoint,
        "https://monitoring.example.com/graphql"
    );
    assert_eq!(config.bearer_token.expose_secret(), "Bearer abc123");
    assert_eq!(config.start_time, "2024-06-01T00:00:00.000Z");
    assert_eq!(config.end_time, "2024-06-02T00:00:00.000Z");
    assert_eq!(config.output_csv, PathBuf::from("reports/services.csv"));
    assert_eq!(config.log_file, PathBuf::from("logs/svcdeps.log"));
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_log_file_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    let temp_file = write_config(
        r#"{
    "graphql_endpoint": "http://localhost:9000/graphql",
    "bearer_token": "Bearer abc123",
    "start_time": "2024-06-01T00:00:00.000Z",
    "end_time": "2024-06-02T00:00:00.000Z",
    "output_csv": "services.csv"
}"#,
    );

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.log_file, PathBuf::from("service_dependency.log"));
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_env_overrides_applied() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("SVCDEPS_BEARER_TOKEN", "Bearer overridden");
    std::env::set_var("SVCDEPS_START_TIME", "2024-07-01T00:00:00.000Z");
    std::env::set_var("SVCDEPS_OUTPUT_CSV", "override.csv");
    let temp_file = write_config(COMPLETE_CONFIG);

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.bearer_token.expose_secret(), "Bearer overridden");
    assert_eq!(config.start_time, "2024-07-01T00:00:00.000Z");
    assert_eq!(config.end_time, "2024-06-02T00:00:00.000Z");
    assert_eq!(config.output_csv, PathBuf::from("override.csv"));
    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_MONITORING_TOKEN", "Bearer from-environment");
    let temp_file = write_config(
        r#"{
    "graphql_endpoint": "https://monitoring.example.com/graphql",
    "bearer_token": "${TEST_MONITORING_TOKEN}",
    "start_time": "2024-06-01T00:00:00.000Z",
    "end_time": "2024-06-02T00:00:00.000Z",
    "output_csv": "services.csv"
}"#,
    );

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(
        config.bearer_token.expose_secret(),
        "Bearer from-environment"
    );
    cleanup_env_vars();
}

#[test]
fn test_missing_required_key() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    let temp_file = write_config(
        r#"{
    "graphql_endpoint": "https://monitoring.example.com/graphql",
    "bearer_token": "Bearer abc123",
    "start_time": "2024-06-01T00:00:00.000Z",
    "end_time": "2024-06-02T00:00:00.000Z"
}"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();

    assert!(matches!(err, ExporterError::Configuration(_)));
    assert!(err.to_string().contains("output_csv"));
}

#[test]
fn test_invalid_endpoint_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    let temp_file = write_config(&COMPLETE_CONFIG.replace(
        "https://monitoring.example.com/graphql",
        "monitoring.example.com",
    ));

    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("validation failed"));
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/svcdeps/config.json").unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}
