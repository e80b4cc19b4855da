//! Time-of-day helpers for `HH:MM` strings and countdown formatting.

use std::sync::LazyLock;

use regex::Regex;

use super::error::ScheduleError;

// Strict display/storage format: zero-padded, 24-hour.
static TIME_FORMAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

/// Checks a time string against the strict `HH:MM` format
/// (hour 00-23, minute 00-59, zero-padded).
pub fn is_valid_time_format(time: &str) -> bool {
    TIME_FORMAT_REGEX.is_match(time)
}

/// Parses a `HH:MM` string into minutes since midnight.
///
/// Accepts one or two hour digits. Anything else (non-numeric segments,
/// out-of-range hour/minute) fails with `InvalidTimeFormat`.
pub fn time_to_minutes(time: &str) -> Result<u32, ScheduleError> {
    let invalid = || ScheduleError::InvalidTimeFormat {
        value: time.to_string(),
    };

    let (hh, mm) = time.split_once(':').ok_or_else(invalid)?;
    if hh.is_empty() || hh.len() > 2 || mm.len() != 2 {
        return Err(invalid());
    }
    if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: u32 = hh.parse().map_err(|_| invalid())?;
    let minutes: u32 = mm.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Returns true iff both strings parse and `start` is strictly before `end`.
///
/// Equal start/end is invalid, and so are overnight ranges (end before
/// start): this system does not support availability windows that cross
/// midnight.
pub fn validate_time_range(start: &str, end: &str) -> bool {
    if start.is_empty() || end.is_empty() {
        return false;
    }
    match (time_to_minutes(start), time_to_minutes(end)) {
        (Ok(start_minutes), Ok(end_minutes)) => start_minutes < end_minutes,
        _ => false,
    }
}

/// Renders a minute count as `"<h><hour_unit> <m><minute_unit>"`, omitting
/// whichever component is zero. Non-positive input yields an empty string.
pub fn format_countdown(minutes: i64, hour_unit: &str, minute_unit: &str) -> String {
    if minutes <= 0 {
        return String::new();
    }

    let hours = minutes / 60;
    let remainder = minutes % 60;
    match (hours, remainder) {
        (0, m) => format!("{m}{minute_unit}"),
        (h, 0) => format!("{h}{hour_unit}"),
        (h, m) => format!("{h}{hour_unit} {m}{minute_unit}"),
    }
}
