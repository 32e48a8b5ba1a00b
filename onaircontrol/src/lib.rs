//! Icecast admin API client for OnAir
//!
//! This crate wraps the streaming server's Basic-Authentication-protected
//! admin endpoint family:
//!
//! - **Statistics**: query connected sources and listener counts
//! - **Metadata**: publish the "now playing" string for a mount
//! - **Source switching**: point a mount at a new fallback/source URL
//! - **Housekeeping**: kick listeners from a mount, reload the server
//!   configuration
//!
//! # Example
//!
//! ```no_run
//! use onaircontrol::AdminClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AdminClient::builder("http://localhost:8000")
//!         .credentials("admin", "hackme")
//!         .build()?;
//!
//!     let mount = client.mount_status("/stream").await?;
//!     println!("{} listeners on {}", mount.listeners, mount.mount);
//!
//!     client.update_metadata("/stream", "Morning Show").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use client::{AdminClient, AdminClientBuilder};
pub use error::{Error, Result};
pub use models::{FallbackUpdate, MetadataUpdate, MountInfo, ServerStats};
