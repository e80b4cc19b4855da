/// Schedule domain: data types, time helpers, and the status engine
mod engine;
mod error;
mod time;
mod types;

pub use engine::{
    compute_status, greeting, schedule_preview, PreviewRow, PreviewStatus, SchedulePreview,
};
pub use error::ScheduleError;
pub use time::{format_countdown, is_valid_time_format, time_to_minutes, validate_time_range};
pub use types::{DaySchedule, ScheduleRecord, Status, StatusResult, UpcomingDay};

/// Canonical day identifiers used as storage keys for upcoming days.
/// Display-layer translation happens in `crate::locale`; these exact strings
/// are what gets persisted.
pub const CANONICAL_DAYS: [&str; 8] = [
    "Tomorrow",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
