//! Weekly on-air schedule handling for OnAir
//!
//! This crate owns the schedule document that drives the streaming
//! server's on-air state:
//!
//! - **Model & Validation**: typed [`ScheduleDocument`]/[`Slot`] structures
//!   built from untyped JSON through a single parse-and-validate step
//! - **Resolution**: [`active_slot`] determines which program is on air at
//!   a given local time
//! - **Persistence**: [`ScheduleStore`] keeps the last-known-good document
//!   on disk for fallback when the publisher is unreachable
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use onairschedule::{active_slot, ScheduleDocument, ScheduleStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let raw = std::fs::read_to_string("current_schedule.json")?;
//!     let value: serde_json::Value = serde_json::from_str(&raw)?;
//!     let document = ScheduleDocument::from_value(&value)?;
//!
//!     if let Some(slot) = active_slot(&document, Local::now().naive_local()) {
//!         println!("On air: {}", slot.title);
//!     }
//!
//!     let store = ScheduleStore::new("current_schedule.json");
//!     store.save(&document)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod resolve;
pub mod store;

// Re-exports
pub use error::{StoreError, ValidationError};
pub use models::{ScheduleDocument, Slot, Weekday};
pub use resolve::active_slot;
pub use store::ScheduleStore;
