//! CSV output
//!
//! Writes ranked service records to a CSV file, replacing any previous
//! content.

use crate::domain::{ExporterError, Result, ServiceRecord};
use csv::{Terminator, WriterBuilder};
use serde_json::Number;
use std::path::Path;

/// Header row, one name per column
pub const CSV_HEADERS: [&str; 9] = [
    "Entity ID",
    "Service Name",
    "Duration P99",
    "Error Count Avg",
    "Number of Calls Avg",
    "Application Type",
    "Outgoing Services",
    "Outgoing Backends",
    "Incoming Services",
];

/// Separator used inside the neighbor list columns
pub const LIST_DELIMITER: &str = ", ";

/// Write `records` to `path` and return the number of data rows written
///
/// Failures are logged before being returned. A failure part-way through can
/// leave an empty or truncated file behind.
///
/// # Examples
///
/// ```no_run
/// use svcdeps::core::export::export_to_csv;
///
/// let rows = export_to_csv(&[], "services.csv").unwrap();
/// assert_eq!(rows, 0);
/// ```
pub fn export_to_csv(records: &[ServiceRecord], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();

    match write_records(records, path) {
        Ok(rows) => {
            tracing::info!(
                rows = rows,
                "Service dependency information has been successfully exported to '{}'.",
                path.display()
            );
            Ok(rows)
        }
        Err(e) => {
            tracing::error!("Failed to write CSV file: {}", e);
            Err(e)
        }
    }
}

fn write_records(records: &[ServiceRecord], path: &Path) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(path)
        .map_err(|e| ExporterError::Export(format!("{}: {}", path.display(), e)))?;

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record(csv_row(record))?;
    }
    writer
        .flush()
        .map_err(|e| ExporterError::Export(format!("{}: {}", path.display(), e)))?;

    Ok(records.len())
}

/// Render one record as the nine CSV fields
///
/// Metrics keep the text they had in the response, so `500` and `500.0`
/// stay distinct and large integers are not rounded.
pub fn csv_row(record: &ServiceRecord) -> [String; 9] {
    [
        record.entity_id.clone(),
        record.name.clone(),
        metric(&record.duration_p99),
        metric(&record.error_count_avg),
        metric(&record.num_calls_avg),
        record.application_type.clone(),
        record.outgoing_services.join(LIST_DELIMITER),
        record.outgoing_backends.join(LIST_DELIMITER),
        record.incoming_services.join(LIST_DELIMITER),
    ]
}

fn metric(value: &Option<Number>) -> String {
    value.as_ref().map(Number::to_string).unwrap_or_default()
}
