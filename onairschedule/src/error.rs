//! Error types for schedule validation and persistence

use crate::models::Weekday;

/// Errors raised while validating an incoming schedule document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The candidate is not a JSON object
    #[error("Schedule is not a JSON object")]
    NotAnObject,

    /// A canonical day key is absent or not an array
    #[error("Day '{day}' is missing or not a sequence")]
    MissingOrNotSequence {
        /// Day whose entry failed the check
        day: Weekday,
    },

    /// A slot lacks a required field, or the field is unusable
    /// (empty string, or a `duration` that is not a positive number)
    #[error("Slot {index} on {day}: missing or invalid field '{field}'")]
    MissingField {
        /// Day the slot belongs to
        day: Weekday,
        /// Position of the slot within the day's sequence
        index: usize,
        /// Offending field name as it appears in the JSON
        field: &'static str,
    },

    /// A slot's `startTime` is not a valid `HH:MM` 24-hour time
    #[error("Slot {index} on {day}: bad start time '{value}'")]
    BadTimeFormat {
        /// Day the slot belongs to
        day: Weekday,
        /// Position of the slot within the day's sequence
        index: usize,
        /// The rejected value
        value: String,
    },
}

/// Errors raised by the durable schedule store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the schedule file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the document failed
    #[error("Failed to serialize schedule: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The persisted content no longer parses as a valid schedule.
    /// Callers treat this like an empty store for fallback purposes,
    /// but the distinction is worth logging.
    #[error("Persisted schedule is corrupt: {0}")]
    Corrupt(String),
}
