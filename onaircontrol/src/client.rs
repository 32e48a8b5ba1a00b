//! HTTP client for the Icecast admin API

use crate::error::{Error, Result};
use crate::models::{FallbackUpdate, MetadataUpdate, MountInfo, ServerStats};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Default timeout for admin API requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "onaircontrol/0.1.0";

/// Authenticated client for the streaming server's admin endpoints
///
/// All requests carry the HTTP Basic credentials configured at
/// construction. Mount-scoped mutations confirm the target mount exists
/// via the stats endpoint first; nothing is cached across calls, so each
/// operation sees the server as it is right now.
///
/// # Example
///
/// ```no_run
/// use onaircontrol::AdminClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AdminClient::builder("http://localhost:8000")
///         .credentials("admin", "hackme")
///         .build()?;
///     client.update_metadata("/stream", "Morning Show").await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminClient {
    client: Client,
    base_url: Url,
    username: String,
    password: String,
}

impl AdminClient {
    /// Create a builder for the given server base URL
    pub fn builder(base_url: impl Into<String>) -> AdminClientBuilder {
        AdminClientBuilder::new(base_url)
    }

    /// Base URL of the streaming server
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Query aggregate server statistics
    pub async fn stats(&self) -> Result<ServerStats> {
        let url = self.endpoint("admin/stats")?;
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    /// Look up the source currently attached to `mount`.
    ///
    /// Fails with [`Error::MountNotFound`] when the stats response does
    /// not list the mount.
    pub async fn mount_status(&self, mount: &str) -> Result<MountInfo> {
        let stats = self.stats().await?;
        stats
            .source(mount)
            .cloned()
            .ok_or_else(|| Error::MountNotFound(mount.to_string()))
    }

    /// Publish a new "now playing" string for `mount`
    pub async fn update_metadata(&self, mount: &str, title: &str) -> Result<()> {
        self.mount_status(mount).await?;

        let url = self.endpoint("admin/metadata")?;
        let body = MetadataUpdate {
            mount,
            mode: "updinfo",
            song: title,
        };
        self.send(self.client.post(url).json(&body)).await?;

        debug!("Updated metadata on {}: {}", mount, title);
        Ok(())
    }

    /// Point `mount` at a new fallback/source URL
    pub async fn switch_source(&self, mount: &str, track_ref: &str) -> Result<()> {
        self.mount_status(mount).await?;

        let url = self.endpoint("admin/fallbacks")?;
        let body = FallbackUpdate {
            mount,
            fallback: track_ref,
        };
        self.send(self.client.post(url).json(&body)).await?;

        info!("Switched source on {} to {}", mount, track_ref);
        Ok(())
    }

    /// Disconnect all listeners from `mount`
    pub async fn kick_listeners(&self, mount: &str) -> Result<()> {
        self.mount_status(mount).await?;

        let mut url = self.endpoint("admin/killmount")?;
        url.query_pairs_mut().append_pair("mount", mount);
        self.send(self.client.post(url)).await?;

        info!("Kicked listeners from {}", mount);
        Ok(())
    }

    /// Ask the server to reload its configuration
    pub async fn reload_config(&self) -> Result<()> {
        let url = self.endpoint("admin/reloadconfig")?;
        self.send(self.client.post(url)).await?;

        info!("Requested configuration reload");
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(Error::from_status(status.as_u16(), message))
    }
}

/// Builder for configuring an [`AdminClient`]
#[derive(Debug)]
pub struct AdminClientBuilder {
    client: Option<Client>,
    base_url: String,
    username: String,
    password: String,
    timeout: Duration,
    user_agent: String,
}

impl AdminClientBuilder {
    /// Create a builder for the given server base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: None,
            base_url: base_url.into(),
            username: "admin".to_string(),
            password: "hackme".to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the HTTP Basic credentials
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set a custom HTTP client (shared connection pools, proxies)
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AdminClient> {
        let mut base_url = Url::parse(&self.base_url)?;
        // Keep a trailing slash so joins append instead of replacing the
        // last path segment.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(AdminClient {
            client,
            base_url,
            username: self.username,
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = AdminClient::builder("http://localhost:8000");
        assert_eq!(builder.username, "admin");
        assert_eq!(builder.timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = AdminClient::builder("http://localhost:8000")
            .build()
            .unwrap();
        assert_eq!(client.base_url().path(), "/");

        let url = client.endpoint("admin/stats").unwrap();
        assert_eq!(url.path(), "/admin/stats");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = AdminClient::builder("not a url").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
