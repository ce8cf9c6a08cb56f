//! Domain models and types for svcdeps.
//!
//! The domain layer provides:
//! - **Records** ([`ServiceRecord`]) produced by the transformer and consumed by the exporter
//! - **Query inputs** ([`TimeWindow`])
//! - **Error types** ([`ExporterError`], [`QueryError`], [`TransformError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExporterError>`]:
//!
//! ```rust,no_run
//! use svcdeps::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = svcdeps::config::load_config("config.json")?;
//!     println!("{}", config.output_csv.display());
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;
pub mod window;

pub use errors::{ExporterError, QueryError, TransformError};
pub use record::{ServiceRecord, MISSING_APPLICATION_TYPE};
pub use result::Result;
pub use window::TimeWindow;
