//! Domain error types
//!
//! This module defines the error hierarchy for svcdeps. Each pipeline stage
//! has its own error kind so the orchestrator can tell them apart, and none of
//! them expose third-party types.

use thiserror::Error;

/// Main svcdeps error type
///
/// This is the primary error type used throughout the application.
/// It wraps stage-specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// GraphQL query errors
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Response transformation errors
    #[error("Transformation error: {0}")]
    Transform(#[from] TransformError),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Network/connection errors
    #[error("Connection error: {0}")]
    Connection(String),
}

/// GraphQL query errors
///
/// Errors that occur when talking to the monitoring endpoint.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The endpoint answered with anything other than 200 OK
    #[error("Query failed to run by returning code of {status}. {query}")]
    UnexpectedStatus { status: u16, query: String },

    /// The endpoint answered 200 but the body could not be parsed
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

/// Errors raised while flattening the raw query result
#[derive(Debug, Error)]
pub enum TransformError {
    /// The response has no entity list at the expected path
    #[error("response has no entity list at '{0}'")]
    MissingResults(String),

    /// A required field is absent from the response
    #[error("entity {entity}: missing field '{path}'")]
    MissingField { entity: usize, path: String },

    /// A field is present but holds the wrong JSON type
    #[error("entity {entity}: field '{path}' is not a {expected}")]
    InvalidField {
        entity: usize,
        path: String,
        expected: &'static str,
    },
}

// CSV failures only happen while exporting
impl From<csv::Error> for ExporterError {
    fn from(err: csv::Error) -> Self {
        ExporterError::Export(err.to_string())
    }
}
