//! Flattened per-service record
//!
//! A [`ServiceRecord`] is built once from one entity of the raw query result
//! and is read-only afterwards.

use serde_json::Number;

/// Value written when an entity has no `applicationType` attribute
pub const MISSING_APPLICATION_TYPE: &str = "N/A";

/// One service with its metrics and direct neighbors
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRecord {
    /// Entity identifier, unique within one run
    pub entity_id: String,

    /// Service name
    pub name: String,

    /// 99th percentile call duration, `None` when the endpoint sent `null`
    pub duration_p99: Option<Number>,

    /// Mean error count
    pub error_count_avg: Option<Number>,

    /// Mean number of calls, the ranking key
    pub num_calls_avg: Option<Number>,

    /// Application type, or [`MISSING_APPLICATION_TYPE`]
    pub application_type: String,

    /// Names of services this service calls
    pub outgoing_services: Vec<String>,

    /// Names of backends this service calls
    pub outgoing_backends: Vec<String>,

    /// Names of services calling this service
    pub incoming_services: Vec<String>,
}

impl ServiceRecord {
    /// Call volume used for ranking; `None` when no value was reported
    pub fn calls(&self) -> Option<f64> {
        self.num_calls_avg.as_ref().and_then(Number::as_f64)
    }
}
