// svcdeps - Service Dependency Exporter
// Copyright (c) 2025 svcdeps Contributors
// Licensed under the MIT License

//! # svcdeps - Service Dependency Exporter
//!
//! svcdeps queries a GraphQL monitoring endpoint for service dependency
//! metrics over a time window, flattens the nested response into one record
//! per service, ranks the services by call volume and writes them to a CSV
//! file. It is a one-shot reporting tool: it runs once and exits.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (transform, export orchestration)
//! - [`adapters`] - External integrations (GraphQL endpoint)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Log file setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use svcdeps::config::load_config;
//! use svcdeps::core::export::ExportCoordinator;
//! use svcdeps::logging::init_logging;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("config.json")?;
//!     let _guard = init_logging(&config.log_level, &config.log_file)?;
//!
//!     let coordinator = ExportCoordinator::new(config)?;
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Exported {} services", summary.rows_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! The CSV file has a fixed header and one row per service, busiest first:
//!
//! ```text
//! Entity ID,Service Name,Duration P99,Error Count Avg,Number of Calls Avg,Application Type,Outgoing Services,Outgoing Backends,Incoming Services
//! e1,svc-a,120.5,0.02,500,N/A,svc-b,,
//! ```
//!
//! Neighbor lists are joined with `", "`. A service without an
//! `applicationType` attribute gets `N/A`.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
