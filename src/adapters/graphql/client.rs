//! GraphQL HTTP client
//!
//! Sends one query document to the monitoring endpoint and hands back the
//! parsed JSON body. There is no retry: a non-200 answer is an error.

use super::query::QueryBuilder;
use crate::config::ExporterConfig;
use crate::domain::{ExporterError, QueryError, Result, TimeWindow};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

/// Client for the monitoring GraphQL endpoint
///
/// # Example
///
/// ```no_run
/// use svcdeps::adapters::graphql::GraphQlClient;
/// use svcdeps::domain::TimeWindow;
/// use secrecy::SecretString;
///
/// # async fn example() -> svcdeps::domain::Result<()> {
/// let token = SecretString::new("Bearer abc123".to_string());
/// let client = GraphQlClient::new("https://monitoring.example.com/graphql", &token)?;
/// let window = TimeWindow::new("2024-06-01T00:00:00Z", "2024-06-02T00:00:00Z")?;
/// let body = client.fetch_service_dependencies(&window).await?;
/// # Ok(())
/// # }
/// ```
pub struct GraphQlClient {
    /// Endpoint URL
    endpoint: String,

    /// HTTP client for making requests
    client: Client,

    /// `Authorization` header, marked sensitive
    authorization: HeaderValue,
}

/// Request body `{"query": <document>}`
#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

impl GraphQlClient {
    /// Create a client for `endpoint` presenting `bearer_token` verbatim
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token cannot be sent as an HTTP
    /// header value, or a connection error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, bearer_token: &SecretString) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(bearer_token.expose_secret())
            .map_err(|_| {
                ExporterError::Configuration(
                    "bearer_token contains characters that are not allowed in an HTTP header"
                        .to_string(),
                )
            })?;
        authorization.set_sensitive(true);

        let client = ClientBuilder::new()
            .build()
            .map_err(|e| ExporterError::Connection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
            authorization,
        })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &ExporterConfig) -> Result<Self> {
        Self::new(config.graphql_endpoint.clone(), &config.bearer_token)
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch service dependency metrics for `window`
    pub async fn fetch_service_dependencies(&self, window: &TimeWindow) -> Result<Value> {
        let query = QueryBuilder::service_dependencies(window).build()?;

        tracing::debug!(
            endpoint = %self.endpoint,
            window = %window,
            "Fetching service dependencies"
        );

        self.execute(&query).await
    }

    /// POST `query` and return the parsed body
    ///
    /// # Errors
    ///
    /// - [`ExporterError::Connection`] if the request cannot be sent
    /// - [`QueryError::UnexpectedStatus`] for any status other than 200
    /// - [`QueryError::InvalidResponse`] if the body is not JSON
    pub async fn execute(&self, query: &str) -> Result<Value> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.authorization.clone())
            .json(&GraphQlRequest { query })
            .send()
            .await
            .map_err(|e| ExporterError::Connection(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::error!("Query failed with status code {}.", status.as_u16());
            return Err(QueryError::UnexpectedStatus {
                status: status.as_u16(),
                query: query.to_string(),
            }
            .into());
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| QueryError::InvalidResponse(e.to_string()))?;

        if let Some(errors) = body
            .get("errors")
            .and_then(Value::as_array)
            .filter(|errors| !errors.is_empty())
        {
            tracing::warn!(
                count = errors.len(),
                errors = ?errors,
                "GraphQL response has errors"
            );
        }

        tracing::info!("GraphQL query executed successfully.");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn token() -> SecretString {
        SecretString::new("Bearer abc123".to_string())
    }

    fn window() -> TimeWindow {
        TimeWindow::new("2024-06-01T00:00:00.000Z", "2024-06-02T00:00:00.000Z").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body_unchanged() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({ "data": { "entities": { "results": [] } } });

        let mock = server
            .mock("POST", "/graphql")
            .match_header("authorization", "Bearer abc123")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Regex(r#"^\{"query":".*startTime: \\"2024-06-01T00:00:00.000Z\\""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = GraphQlClient::new(format!("{}/graphql", server.url()), &token()).unwrap();
        let result = client.fetch_service_dependencies(&window()).await.unwrap();

        assert_eq!(result, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_200_fails_with_status_and_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = GraphQlClient::new(format!("{}/graphql", server.url()), &token()).unwrap();
        let err = client
            .fetch_service_dependencies(&window())
            .await
            .unwrap_err();

        match err {
            ExporterError::Query(QueryError::UnexpectedStatus { status, query }) => {
                assert_eq!(status, 500);
                assert!(query.contains("entities("));
            }
            other => panic!("Expected UnexpectedStatus, got {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_other_success_codes_are_rejected() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(202)
            .with_body("{}")
            .create_async()
            .await;

        let client = GraphQlClient::new(format!("{}/graphql", server.url()), &token()).unwrap();
        let err = client.execute("{ entities }").await.unwrap_err();

        assert!(matches!(
            err,
            ExporterError::Query(QueryError::UnexpectedStatus { status: 202, .. })
        ));
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body("<html>login</html>")
            .create_async()
            .await;

        let client = GraphQlClient::new(format!("{}/graphql", server.url()), &token()).unwrap();
        let err = client.execute("{ entities }").await.unwrap_err();

        assert!(matches!(
            err,
            ExporterError::Query(QueryError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_graphql_errors_still_return_body() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({ "errors": [{ "message": "bad window" }], "data": null });
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = GraphQlClient::new(format!("{}/graphql", server.url()), &token()).unwrap();
        let result = client.execute("{ entities }").await.unwrap();

        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_graphql_errors_are_logged_as_warning() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_file = temp_dir.path().join("client.log");
        let mut server = mockito::Server::new_async().await;
        let body = json!({ "errors": [{ "message": "window too large" }], "data": null });
        let _mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let guard = crate::logging::init_logging("info", &log_file).unwrap();
        let client = GraphQlClient::new(format!("{}/graphql", server.url()), &token()).unwrap();
        client.execute("{ entities }").await.unwrap();
        drop(guard);

        let contents = std::fs::read_to_string(&log_file).unwrap();
        let warning = contents
            .lines()
            .find(|line| line.contains(" - WARN - GraphQL response has errors"))
            .expect("warning line");
        assert!(warning.contains("count=1"));
        assert!(warning.contains("window too large"));
        assert!(contents.contains(" - INFO - GraphQL query executed successfully."));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let client = GraphQlClient::new("http://127.0.0.1:1/graphql", &token()).unwrap();
        let err = client.execute("{ entities }").await.unwrap_err();

        assert!(matches!(err, ExporterError::Connection(_)));
    }

    #[test]
    fn test_token_must_be_header_safe() {
        let token = SecretString::new("Bearer abc\n123".to_string());
        let result = GraphQlClient::new("http://localhost/graphql", &token);

        assert!(matches!(result, Err(ExporterError::Configuration(_))));
    }
}
