//! Error types for schedule validation and persistence.

use thiserror::Error;

/// Errors that can occur while validating or persisting schedule data.
#[derive(Debug, Error, Clone)]
pub enum ScheduleError {
    /// Time string does not match `HH:MM` with in-range hour/minute
    #[error("Invalid time format: {value:?}")]
    InvalidTimeFormat { value: String },

    /// Start time is not strictly before end time on an active day
    #[error("Invalid time range for {day}: {start} - {end}")]
    InvalidTimeRange {
        day: String,
        start: String,
        end: String,
    },

    /// Stored payload could not be read or parsed
    #[error("Failed to read stored settings: {message}")]
    PersistenceRead { message: String },

    /// Storage write failed (unavailable, full, ...)
    #[error("Failed to write settings: {message}")]
    PersistenceWrite { message: String },
}

impl ScheduleError {
    /// Returns true if this error is a validation failure the editing user
    /// can fix, as opposed to a storage-layer failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidTimeFormat { .. } | ScheduleError::InvalidTimeRange { .. }
        )
    }

    pub(crate) fn read_failure(err: impl std::fmt::Display) -> Self {
        ScheduleError::PersistenceRead {
            message: err.to_string(),
        }
    }

    pub(crate) fn write_failure(err: impl std::fmt::Display) -> Self {
        ScheduleError::PersistenceWrite {
            message: err.to_string(),
        }
    }
}
