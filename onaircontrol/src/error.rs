//! Error types for the Icecast admin client

/// Result type alias for admin API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the admin API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport failed (connection, timeout, body decoding)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid base or endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Credentials rejected by the server (401/403)
    #[error("Authentication rejected: {0}")]
    Auth(String),

    /// Requested mount is not among the server's sources
    #[error("Mount not found: {0}")]
    MountNotFound(String),

    /// Admin API returned an unexpected status
    #[error("Admin API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, when readable
        message: String,
    },
}

impl Error {
    /// Map an HTTP status code onto the error taxonomy
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Auth(message.into()),
            _ => Self::Api {
                status,
                message: message.into(),
            },
        }
    }

    /// Whether the error is a credential rejection
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
