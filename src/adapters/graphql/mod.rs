//! GraphQL monitoring endpoint adapter
//!
//! This module provides the query templates and the HTTP client used to
//! read service dependency metrics.

pub mod client;
pub mod query;

pub use client::GraphQlClient;
pub use query::{QueryBuilder, ENTITY_LIMIT, SERVICE_DEPENDENCIES_TEMPLATE};
