//! Export orchestration and CSV output

pub mod coordinator;
pub mod csv_file;
pub mod summary;

pub use coordinator::{ExportCoordinator, Stage};
pub use csv_file::{csv_row, export_to_csv, CSV_HEADERS, LIST_DELIMITER};
pub use summary::ExportSummary;
