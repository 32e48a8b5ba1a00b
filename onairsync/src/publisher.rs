//! Client for the schedule publisher endpoint

use crate::error::FetchError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default timeout for schedule fetches
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "onairsync/0.1.0";

/// HTTP client for the remote schedule publisher
///
/// The publisher exposes a single endpoint returning the authoritative
/// weekly schedule as JSON. Any transport failure, timeout, non-2xx
/// status or unreadable body is a fetch failure; validation of the
/// document itself happens downstream.
#[derive(Debug, Clone)]
pub struct PublisherClient {
    client: Client,
    endpoint: String,
}

impl PublisherClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS))
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint URL this client polls
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the raw schedule document
    pub async fn fetch(&self) -> Result<Value, FetchError> {
        debug!("Fetching schedule from {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
