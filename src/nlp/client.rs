//! HTTP client for the natural-language search service.

use super::models::{NlpErrorBody, NlpFilters, NlpRequest};
use crate::config::Config;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use wreq::Client;

/// Message used when a failed response carries no error text.
pub const UNKNOWN_SERVER_ERROR: &str = "Unknown server error";

/// Errors from interpreting a query through the search service.
#[derive(Debug, Error)]
pub enum NlpError {
    /// Transport failure or client setup error
    #[error("Request to search service failed: {0}")]
    Http(#[from] wreq::Error),

    /// Non-success status; carries the service's error text
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Body could not be encoded or decoded
    #[error("Invalid search service payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Trait for query interpretation - enables mocking for tests.
#[async_trait]
pub trait NlpSearch: Send + Sync {
    /// Sends a free-text query and returns the structured filters.
    async fn interpret(&self, query: &str) -> Result<NlpFilters, NlpError>;
}

/// Search service HTTP client.
pub struct NlpClient {
    client: Client,
    endpoint: String,
}

impl NlpClient {
    /// Creates a client for the endpoint configured in `config`.
    pub fn new(config: &Config) -> Result<Self, NlpError> {
        Self::with_endpoint(config, config.nlp_endpoint.clone())
    }

    /// Creates a client for a specific endpoint (for testing).
    pub fn with_endpoint(config: &Config, endpoint: String) -> Result<Self, NlpError> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            builder = builder.proxy(wreq::Proxy::all(proxy_url)?);
        }

        Ok(Self { client: builder.build()?, endpoint })
    }

    /// Returns the endpoint queries are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NlpSearch for NlpClient {
    async fn interpret(&self, query: &str) -> Result<NlpFilters, NlpError> {
        let body = serde_json::to_string(&NlpRequest { query })?;

        info!("Interpreting query: {}", query);
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<NlpErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| UNKNOWN_SERVER_ERROR.to_string());

            warn!("Search service returned {}: {}", status, message);
            return Err(NlpError::Service { status: status.as_u16(), message });
        }

        let filters: NlpFilters = serde_json::from_str(&text)?;
        debug!("Interpreted filters: {:?}", filters);
        Ok(filters)
    }
}
