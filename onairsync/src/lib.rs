//! Schedule reconciliation for OnAir
//!
//! This crate drives the synchronization between a remotely published
//! weekly schedule and a running streaming server:
//!
//! - **Configuration**: [`SyncConfig`] reads the daemon's environment
//!   variables and fails fast, naming every missing one
//! - **Fetching**: [`PublisherClient`] retrieves the schedule document
//!   from the publisher endpoint
//! - **Reconciliation**: [`Reconciler`] runs the periodic
//!   fetch → validate → persist → resolve → apply cycle with
//!   last-known-good fallback
//!
//! # Example
//!
//! ```no_run
//! use onairsync::{Reconciler, SyncConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SyncConfig::from_env()?;
//!     let reconciler = Reconciler::new(&config)?;
//!     reconciler.run().await
//! }
//! ```

pub mod config;
pub mod error;
pub mod publisher;
pub mod reconciler;

// Re-exports
pub use config::SyncConfig;
pub use error::{ConfigError, FetchError};
pub use publisher::PublisherClient;
pub use reconciler::{CycleReport, Reconciler, ScheduleSource};
