// HTTP client for the slang dictionary server

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;

use super::encode::percent_encode;
use super::outcome::QueryOutcome;
use crate::config::ClientConfig;
use crate::protocol::SlangDefinition;

const SLANG_API_PATH: &str = "/api/slang";

/// Status text for a request that produced no response.
pub const NETWORK_FAILURE_REASON: &str = "network request failed";

/// Anything that can turn a term into a [`QueryOutcome`].
///
/// The interactive session dispatches through this trait so it never depends
/// on a live server.
#[async_trait]
pub trait SlangLookup: Send + Sync {
    /// Look up a non-empty term. Never fails: every failure is an outcome.
    async fn execute(&self, term: &str) -> QueryOutcome;
}

pub struct QueryExecutor {
    client: Client,
    base_url: String,
}

impl QueryExecutor {
    pub fn new(host: &str, port: u16, timeout: Option<Duration>) -> Result<Self> {
        // The dictionary server is addressed directly, never through a proxy,
        // and a redirect is an answer in its own right.
        let mut builder = Client::builder()
            .no_proxy()
            .redirect(Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: format!("http://{}:{}", host, port),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.host, config.port, config.request_timeout())
    }

    /// Full URL for a term lookup.
    pub fn request_url(&self, term: &str) -> String {
        format!(
            "{}{}?term={}",
            self.base_url,
            SLANG_API_PATH,
            percent_encode(term)
        )
    }

    async fn fetch(&self, term: &str) -> QueryOutcome {
        let url = self.request_url(term);
        tracing::debug!("GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request for {:?} failed: {}", term, e);
                return QueryOutcome::TransportError(NETWORK_FAILURE_REASON.to_string());
            }
        };

        let status = response.status();
        tracing::debug!("Server answered {} for {:?}", status, term);

        match status {
            StatusCode::OK => match response.text().await {
                Ok(body) => classify_body(body),
                Err(e) => {
                    tracing::warn!("Failed to read response body for {:?}: {}", term, e);
                    QueryOutcome::TransportError(NETWORK_FAILURE_REASON.to_string())
                }
            },
            StatusCode::NOT_FOUND => QueryOutcome::NotFound(term.to_string()),
            other => QueryOutcome::TransportError(format!("unexpected status {}", other.as_u16())),
        }
    }
}

#[async_trait]
impl SlangLookup for QueryExecutor {
    async fn execute(&self, term: &str) -> QueryOutcome {
        debug_assert!(!term.is_empty(), "empty terms are rejected before dispatch");
        self.fetch(term).await
    }
}

/// Turn a 200 body into either a definition or a parse failure.
fn classify_body(body: String) -> QueryOutcome {
    match SlangDefinition::from_body(&body) {
        Ok(definition) => QueryOutcome::Success(definition),
        Err(e) => {
            tracing::warn!("Unusable response body: {}", e);
            QueryOutcome::ParseError(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_creation() {
        assert!(QueryExecutor::new("127.0.0.1", 8080, None).is_ok());
        assert!(QueryExecutor::new("localhost", 9000, Some(Duration::from_secs(5))).is_ok());
    }

    #[test]
    fn test_request_url_encodes_term() {
        let executor = QueryExecutor::new("localhost", 8080, None).unwrap();
        assert_eq!(
            executor.request_url("no cap"),
            "http://localhost:8080/api/slang?term=no%20cap"
        );
        assert_eq!(
            executor.request_url("yeet"),
            "http://localhost:8080/api/slang?term=yeet"
        );
    }

    #[test]
    fn test_classify_body() {
        assert!(classify_body(r#"{"term":"yeet"}"#.to_string()).is_success());
        assert_eq!(
            classify_body("<html></html>".to_string()),
            QueryOutcome::ParseError("<html></html>".to_string())
        );
        assert_eq!(
            classify_body("[1,2]".to_string()),
            QueryOutcome::ParseError("[1,2]".to_string())
        );
    }
}
