//! External system integrations for svcdeps.
//!
//! - [`graphql`] - GraphQL monitoring endpoint (query templates and HTTP client)
//!
//! # Example
//!
//! ```rust,no_run
//! use svcdeps::adapters::graphql::GraphQlClient;
//! use svcdeps::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("config.json")?;
//! let client = GraphQlClient::from_config(&config)?;
//! let body = client.fetch_service_dependencies(&config.time_window()?).await?;
//! # Ok(())
//! # }
//! ```

pub mod graphql;
