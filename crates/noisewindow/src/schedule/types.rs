/// Types for schedule and availability data
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;
use super::time::{is_valid_time_format, validate_time_range};

/// One calendar day's plan. When `off` or `tba` is set the time fields are
/// ignored; the two flags are mutually exclusive (setting one clears the
/// other).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub off: bool,
    #[serde(default)]
    pub tba: bool,
}

impl DaySchedule {
    /// A working day with the given `HH:MM` start and end times.
    pub fn working(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            off: false,
            tba: false,
        }
    }

    /// Marks or unmarks the day as fully unavailable. Clears `tba` when set.
    pub fn set_off(&mut self, off: bool) {
        self.off = off;
        if off {
            self.tba = false;
        }
    }

    /// Marks or unmarks the day's hours as undecided. Clears `off` when set.
    pub fn set_tba(&mut self, tba: bool) {
        self.tba = tba;
        if tba {
            self.off = false;
        }
    }

    /// Returns true when both time fields are present.
    pub fn has_hours(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }

    fn validate(&self, day: &str) -> Result<(), ScheduleError> {
        // off/tba days carry no meaningful hours
        if self.off || self.tba {
            return Ok(());
        }
        for value in [&self.start, &self.end] {
            if !is_valid_time_format(value) {
                return Err(ScheduleError::InvalidTimeFormat {
                    value: value.clone(),
                });
            }
        }
        if !validate_time_range(&self.start, &self.end) {
            return Err(ScheduleError::InvalidTimeRange {
                day: day.to_string(),
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }
        Ok(())
    }
}

/// An upcoming day: a plan plus the canonical day identifier it belongs to.
///
/// `day` is always a canonical English label (see `schedule::CANONICAL_DAYS`),
/// never a localized string, so stored data stays portable across locale
/// switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingDay {
    pub day: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub off: bool,
    #[serde(default)]
    pub tba: bool,
}

impl UpcomingDay {
    pub fn working(day: &str, start: &str, end: &str) -> Self {
        Self {
            day: day.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            off: false,
            tba: false,
        }
    }

    pub fn day_off(day: &str, start: &str, end: &str) -> Self {
        Self {
            day: day.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            off: true,
            tba: false,
        }
    }

    fn as_day_schedule(&self) -> DaySchedule {
        DaySchedule {
            start: self.start.clone(),
            end: self.end.clone(),
            off: self.off,
            tba: self.tba,
        }
    }
}

/// The full persisted schedule. Replaced whole on every save, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    #[serde(default)]
    pub today: Option<DaySchedule>,
    #[serde(default)]
    pub upcoming_days: Vec<UpcomingDay>,
    /// Advisory flag only; nothing in the engine depends on it.
    #[serde(default)]
    pub notifications: bool,
    /// RFC 3339 timestamp of the last save, stamped by the caller.
    #[serde(default)]
    pub last_updated: String,
}

impl ScheduleRecord {
    /// Validates every day in the record (today plus each upcoming day),
    /// skipping days marked `off` or `tba`. Used by the store before any
    /// write; a single failure blocks the entire save.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if let Some(today) = &self.today {
            today.validate("Today")?;
        }
        for upcoming in &self.upcoming_days {
            upcoming.as_day_schedule().validate(&upcoming.day)?;
        }
        Ok(())
    }
}

impl Default for ScheduleRecord {
    /// Built-in defaults used when nothing has been persisted yet, mirroring
    /// the admin form's initial state.
    fn default() -> Self {
        Self {
            today: Some(DaySchedule::working("09:00", "17:00")),
            upcoming_days: vec![
                UpcomingDay::working("Tomorrow", "10:00", "14:00"),
                UpcomingDay::working("Wednesday", "09:00", "17:00"),
                UpcomingDay::day_off("Thursday", "09:00", "17:00"),
            ],
            notifications: true,
            last_updated: String::new(),
        }
    }
}

/// The four-way availability classification shown to viewers.
///
/// `Busy` is reserved: it exists in the stored/wire vocabulary but the status
/// derivation never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Available,
    Busy,
    Off,
    Sleeping,
}

/// Result of a status computation. Ephemeral; recomputed on demand and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    pub status: Status,
    pub label: String,
}
