//! Error types for the sync daemon

/// Errors raised while reading the daemon configuration at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more required environment variables are absent (or empty)
    #[error("Missing required configuration: {}", .0.join(", "))]
    Missing(Vec<String>),

    /// A variable is present but unusable
    #[error("Invalid value for {name}: {reason}")]
    Invalid {
        /// Variable name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Errors raised while fetching the published schedule
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or unreadable body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Publisher answered with a non-2xx status
    #[error("Publisher returned status {0}")]
    Status(u16),
}
