//! Response transformation
//!
//! Flattens the raw query result into [`ServiceRecord`]s and ranks them by
//! call volume.

pub mod entity;

use crate::domain::{Result, ServiceRecord, TransformError};
use serde_json::Value;
use std::cmp::Ordering;

/// JSON pointer of the entity list in a query result
pub const RESULTS_POINTER: &str = "/data/entities/results";

/// Transform a raw query result into ranked service records
///
/// Entities are read in received order, then stably sorted by
/// `num_calls_avg`, highest first. Entities with equal call counts keep their
/// relative order, and entities reporting no call count come last.
///
/// # Errors
///
/// Returns a [`TransformError`] if the entity list is missing or an entity
/// lacks a required field.
///
/// # Examples
///
/// ```
/// use svcdeps::core::transform::transform_entities;
/// use serde_json::json;
///
/// let raw = json!({ "data": { "entities": { "results": [] } } });
/// let records = transform_entities(&raw).unwrap();
/// assert!(records.is_empty());
/// ```
pub fn transform_entities(raw: &Value) -> Result<Vec<ServiceRecord>> {
    let entities = raw
        .pointer(RESULTS_POINTER)
        .and_then(Value::as_array)
        .ok_or_else(|| TransformError::MissingResults("data.entities.results".to_string()))?;

    let mut records = entities
        .iter()
        .enumerate()
        .map(|(index, entity)| entity::service_record(index, entity))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rank_by_calls(&mut records);

    tracing::debug!(count = records.len(), "Transformed service entities");

    Ok(records)
}

/// Stable sort, highest `num_calls_avg` first, records without one last
pub fn rank_by_calls(records: &mut [ServiceRecord]) {
    records.sort_by(|a, b| match (a.calls(), b.calls()) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
