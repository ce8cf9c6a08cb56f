//! Configuration management for svcdeps.
//!
//! svcdeps is driven entirely by one JSON file with support for:
//! - Environment variable substitution (`${VAR_NAME}`) inside string values
//! - `SVCDEPS_*` environment overrides for every key
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "graphql_endpoint": "https://monitoring.example.com/graphql",
//!   "bearer_token": "${MONITORING_TOKEN}",
//!   "start_time": "2024-06-01T00:00:00.000Z",
//!   "end_time": "2024-06-02T00:00:00.000Z",
//!   "output_csv": "service_dependencies.csv",
//!   "log_file": "service_dependency.log"
//! }
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use svcdeps::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("config.json")?;
//! println!("Endpoint: {}", config.graphql_endpoint);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::ExporterConfig;
