//! GraphQL document templates
//!
//! Documents are written as templates with `{{name}}` placeholders and
//! filled from an explicit parameter map by [`QueryBuilder`]. String
//! parameters are rendered as quoted, escaped GraphQL string literals and
//! integer parameters as bare integer literals.

use crate::domain::{ExporterError, Result, TimeWindow};
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::BTreeMap;

/// Maximum number of entities requested in one query
pub const ENTITY_LIMIT: u32 = 100;

/// Service dependency query
///
/// Parameters: `limit`, `startTime`, `endTime`.
pub const SERVICE_DEPENDENCIES_TEMPLATE: &str = r#"
{
  entities(
    scope: "SERVICE"
    limit: {{limit}}
    between: {
      startTime: {{startTime}}
      endTime: {{endTime}}
    }
  ) {
    results {
      entityId: id
      name: attribute(expression: { key: "name" })
      duration: metric(expression: { key: "duration" }) {
        p99: percentile(size: 99) {
          value
          __typename
        }
        __typename
      }
      errorCount: metric(expression: { key: "errorCount" }) {
        avg {
          value
          __typename
        }
        __typename
      }
      numCalls: metric(expression: { key: "numCalls" }) {
        avg {
          value
          __typename
        }
        __typename
      }
      applicationType: attribute(expression: { key: "applicationType" })
      outgoingEdges_SERVICE: outgoingEdges(neighborType: SERVICE) {
        results {
          neighbor {
            entityId: id
            name: attribute(expression: { key: "name" })
            __typename
          }
          __typename
        }
        __typename
      }
      outgoingEdges_BACKEND: outgoingEdges(neighborType: BACKEND) {
        results {
          neighbor {
            entityId: id
            name: attribute(expression: { key: "name" })
            __typename
          }
          __typename
        }
        __typename
      }
      incomingEdges_SERVICE: incomingEdges(neighborType: SERVICE) {
        results {
          neighbor {
            entityId: id
            name: attribute(expression: { key: "name" })
            __typename
          }
          __typename
        }
        __typename
      }
      __typename
    }
    __typename
  }
}
"#;

/// Fills a document template from a parameter map
///
/// Values are rendered to GraphQL literals when bound.
///
/// # Example
///
/// ```
/// use svcdeps::adapters::graphql::QueryBuilder;
///
/// let query = QueryBuilder::new("{ service(name: {{name}}) { id } }")
///     .param("name", "checkout")
///     .build()
///     .unwrap();
/// assert_eq!(query, r#"{ service(name: "checkout") { id } }"#);
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder<'a> {
    template: &'a str,
    params: BTreeMap<String, String>,
}

impl<'a> QueryBuilder<'a> {
    /// Start from a template
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            params: BTreeMap::new(),
        }
    }

    /// Bind a string parameter
    pub fn param(mut self, name: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.params.insert(name.into(), string_literal(value.as_ref()));
        self
    }

    /// Bind an integer parameter
    pub fn int_param(mut self, name: impl Into<String>, value: i64) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Render the document
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the template references a parameter
    /// that was never bound.
    pub fn build(&self) -> Result<String> {
        let re = Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
            .map_err(|e| ExporterError::Configuration(e.to_string()))?;
        let mut unbound = Vec::new();

        let rendered = re.replace_all(self.template, |cap: &Captures| {
            match self.params.get(&cap[1]) {
                Some(literal) => literal.clone(),
                None => {
                    if !unbound.iter().any(|u| u == &cap[1]) {
                        unbound.push(cap[1].to_string());
                    }
                    cap[0].to_string()
                }
            }
        });

        if !unbound.is_empty() {
            return Err(ExporterError::Configuration(format!(
                "Query template references unbound parameters: {}",
                unbound.join(", ")
            )));
        }

        Ok(rendered.into_owned())
    }
}

impl QueryBuilder<'static> {
    /// The service dependency query for one time window
    pub fn service_dependencies(window: &TimeWindow) -> Self {
        Self::new(SERVICE_DEPENDENCIES_TEMPLATE)
            .int_param("limit", ENTITY_LIMIT.into())
            .param("startTime", window.start())
            .param("endTime", window.end())
    }
}

/// GraphQL string literals share JSON's escaping rules
fn string_literal(value: &str) -> String {
    Value::String(value.to_owned()).to_string()
}
