//! Per-entity field extraction
//!
//! Fields are read by fixed path. Only `applicationType` may be absent; every
//! other path must exist or the entity is rejected. A metric `value` that is
//! present but `null` is kept as "no value".

use crate::domain::{ServiceRecord, TransformError, MISSING_APPLICATION_TYPE};
use serde_json::{Number, Value};

type FieldResult<T> = std::result::Result<T, TransformError>;

/// Build one record from the entity at position `index`
pub fn service_record(index: usize, entity: &Value) -> FieldResult<ServiceRecord> {
    Ok(ServiceRecord {
        entity_id: text(lookup(entity, index, &["entityId"])?),
        name: text(lookup(entity, index, &["name"])?),
        duration_p99: number(entity, index, &["duration", "p99", "value"])?,
        error_count_avg: number(entity, index, &["errorCount", "avg", "value"])?,
        num_calls_avg: number(entity, index, &["numCalls", "avg", "value"])?,
        application_type: entity
            .get("applicationType")
            .map(text)
            .unwrap_or_else(|| MISSING_APPLICATION_TYPE.to_string()),
        outgoing_services: neighbor_names(entity, index, "outgoingEdges_SERVICE")?,
        outgoing_backends: neighbor_names(entity, index, "outgoingEdges_BACKEND")?,
        incoming_services: neighbor_names(entity, index, "incomingEdges_SERVICE")?,
    })
}

/// Follow `path` from `value`; a `null` along the way counts as missing
fn lookup<'a>(value: &'a Value, index: usize, path: &[&str]) -> FieldResult<&'a Value> {
    path.iter().try_fold(value, |current, key| {
        current.get(*key).ok_or_else(|| TransformError::MissingField {
            entity: index,
            path: path.join("."),
        })
    })
}

/// A metric value as received; `null` is `None`
fn number(entity: &Value, index: usize, path: &[&str]) -> FieldResult<Option<Number>> {
    match lookup(entity, index, path)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(Some(n.clone())),
        _ => Err(TransformError::InvalidField {
            entity: index,
            path: path.join("."),
            expected: "number",
        }),
    }
}

/// Render a scalar as CSV text; `null` becomes an empty string
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `<collection>.results[].neighbor.name`; neighbor ids are dropped
fn neighbor_names(entity: &Value, index: usize, collection: &str) -> FieldResult<Vec<String>> {
    let edges = lookup(entity, index, &[collection, "results"])?
        .as_array()
        .ok_or_else(|| TransformError::InvalidField {
            entity: index,
            path: format!("{collection}.results"),
            expected: "list",
        })?;

    edges
        .iter()
        .enumerate()
        .map(|(position, edge)| {
            edge.get("neighbor")
                .and_then(|neighbor| neighbor.get("name"))
                .map(text)
                .ok_or_else(|| TransformError::MissingField {
                    entity: index,
                    path: format!("{collection}.results[{position}].neighbor.name"),
                })
        })
        .collect()
}
