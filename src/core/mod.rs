//! Core business logic for svcdeps.
//!
//! # Modules
//!
//! - [`export`] - Run orchestration and CSV output
//! - [`transform`] - Flattening and ranking of the raw query result
//!
//! # Export Workflow
//!
//! 1. **Fetch**: Query the GraphQL endpoint for the configured time window
//! 2. **Transform**: Flatten each entity into a record, rank by call volume
//! 3. **Export**: Write the header and one row per record to the CSV file
//!
//! # Example
//!
//! ```rust,no_run
//! use svcdeps::config::load_config;
//! use svcdeps::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("config.json")?;
//! let coordinator = ExportCoordinator::new(config)?;
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Rows written: {}", summary.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod transform;
