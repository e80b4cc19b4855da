//! Status derivation and the other pure, clock-driven computations.
//!
//! Everything here is deterministic given the injected time and schedule;
//! there is no hidden state, so callers recompute on demand (the HTTP layer
//! does so per request, viewers poll on the order of every 30 seconds to
//! keep countdowns fresh).

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::locale::{translate_day_name, Language, Translations};

use super::time::{format_countdown, time_to_minutes};
use super::types::{DaySchedule, ScheduleRecord, Status, StatusResult, UpcomingDay};

/// Sleeping hours cover [00:00, 08:00) and override any schedule setting.
const SLEEPING_END_MINUTES: u32 = 8 * 60;

const NOON_MINUTES: u32 = 12 * 60;
const EVENING_MINUTES: u32 = 18 * 60;

fn minutes_since_midnight(now: NaiveTime) -> u32 {
    now.hour() * 60 + now.minute()
}

/// Derives the current availability status from wall-clock time and the
/// stored schedule.
///
/// Priority order: the sleeping-hours override wins over everything; a
/// missing or incomplete configuration falls back to the default-safe
/// "available / working" state so the viewer never sees an error; then
/// today's `off`, `tba`, and hour-window rules apply.
pub fn compute_status(
    now: NaiveTime,
    schedule: Option<&ScheduleRecord>,
    t: &Translations,
) -> StatusResult {
    let current_minutes = minutes_since_midnight(now);

    if current_minutes < SLEEPING_END_MINUTES {
        return StatusResult {
            status: Status::Sleeping,
            label: t.status_sleeping.to_string(),
        };
    }

    if let Some(today) = schedule.and_then(|s| s.today.as_ref()) {
        if today.off {
            return StatusResult {
                status: Status::Off,
                label: t.status_off.to_string(),
            };
        }

        if today.tba {
            // tba maps to the available status code with its own label, not
            // a status of its own. Existing callers rely on this.
            return StatusResult {
                status: Status::Available,
                label: t.status_tba.to_string(),
            };
        }

        if today.has_hours() {
            if let (Ok(start_minutes), Ok(end_minutes)) =
                (time_to_minutes(&today.start), time_to_minutes(&today.end))
            {
                if current_minutes >= start_minutes && current_minutes < end_minutes {
                    return StatusResult {
                        status: Status::Available,
                        label: t.status_working.to_string(),
                    };
                }

                if current_minutes < start_minutes {
                    // Awake but before work starts: show a countdown. The
                    // pre-08:00 case was already taken by the sleeping rule.
                    let countdown = format_countdown(
                        i64::from(start_minutes) - i64::from(current_minutes),
                        t.hour_unit,
                        t.minute_unit,
                    );
                    return StatusResult {
                        status: Status::Off,
                        label: format!("{} {}", t.work_starting_in, countdown),
                    };
                }

                return StatusResult {
                    status: Status::Off,
                    label: t.status_off.to_string(),
                };
            }
            // Unparseable times can only exist in hand-edited storage; treat
            // them as incomplete configuration and fall through.
        }
    }

    StatusResult {
        status: Status::Available,
        label: t.status_working.to_string(),
    }
}

/// Composes the greeting line for the viewer page.
pub fn greeting(now: NaiveTime, t: &Translations, name: Option<&str>) -> String {
    let current_minutes = minutes_since_midnight(now);
    let base = if current_minutes < NOON_MINUTES {
        t.greeting_morning
    } else if current_minutes < EVENING_MINUTES {
        t.greeting_afternoon
    } else {
        t.greeting_evening
    };

    match name {
        Some(name) => format!("{base}, {name}"),
        None => base.to_string(),
    }
}

/// Display status of a single preview row. Unlike [`Status`], `tba` is its
/// own value here because the preview renders it distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStatus {
    Available,
    Off,
    Tba,
}

/// One row of the schedule preview: a localized day label plus either a time
/// range or a localized status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRow {
    pub day: String,
    pub status: PreviewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The preview block: today plus the configured upcoming days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePreview {
    pub today: Option<PreviewRow>,
    pub next_days: Vec<PreviewRow>,
}

fn preview_status(off: bool, tba: bool) -> PreviewStatus {
    if off {
        PreviewStatus::Off
    } else if tba {
        PreviewStatus::Tba
    } else {
        PreviewStatus::Available
    }
}

fn preview_row(
    day_label: String,
    day: &DaySchedule,
    upcoming: bool,
    t: &Translations,
) -> PreviewRow {
    let status = preview_status(day.off, day.tba);
    let (time_range, label) = match status {
        PreviewStatus::Available => (Some(format!("{} - {}", day.start, day.end)), None),
        PreviewStatus::Tba => (None, Some(t.status_tba.to_string())),
        PreviewStatus::Off => {
            let label = if upcoming {
                t.status_off_upcoming
            } else {
                t.status_off
            };
            (None, Some(label.to_string()))
        }
    };

    PreviewRow {
        day: day_label,
        status,
        time_range,
        label,
    }
}

/// Builds the localized preview rows for a schedule record.
pub fn schedule_preview(schedule: &ScheduleRecord, language: Language) -> SchedulePreview {
    let t = language.translations();

    let today = schedule
        .today
        .as_ref()
        .map(|day| preview_row(t.today.to_string(), day, false, t));

    let next_days = schedule
        .upcoming_days
        .iter()
        .map(|upcoming: &UpcomingDay| {
            let day = DaySchedule {
                start: upcoming.start.clone(),
                end: upcoming.end.clone(),
                off: upcoming.off,
                tba: upcoming.tba,
            };
            preview_row(translate_day_name(&upcoming.day, language), &day, true, t)
        })
        .collect();

    SchedulePreview { today, next_days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EN;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn timed_schedule(start: &str, end: &str) -> ScheduleRecord {
        ScheduleRecord {
            today: Some(DaySchedule::working(start, end)),
            ..ScheduleRecord::default()
        }
    }

    #[test]
    fn test_sleeping_hours_override_everything() {
        let mut off_day = ScheduleRecord::default();
        off_day.today.as_mut().unwrap().set_off(true);

        for schedule in [None, Some(&off_day)] {
            let result = compute_status(at(3, 0), schedule, &EN);
            assert_eq!(result.status, Status::Sleeping);
        }

        // Boundary: 07:59 still sleeping, 08:00 not
        assert_eq!(compute_status(at(7, 59), None, &EN).status, Status::Sleeping);
        assert_ne!(compute_status(at(8, 0), None, &EN).status, Status::Sleeping);
        assert_eq!(compute_status(at(0, 0), None, &EN).status, Status::Sleeping);
    }

    #[test]
    fn test_missing_schedule_defaults_to_available() {
        let result = compute_status(at(10, 0), None, &EN);
        assert_eq!(result.status, Status::Available);
        assert_eq!(result.label, "Working");

        let no_today = ScheduleRecord {
            today: None,
            ..ScheduleRecord::default()
        };
        let result = compute_status(at(10, 0), Some(&no_today), &EN);
        assert_eq!(result.status, Status::Available);
    }

    #[test]
    fn test_off_day() {
        let mut record = ScheduleRecord::default();
        record.today.as_mut().unwrap().set_off(true);
        let result = compute_status(at(10, 0), Some(&record), &EN);
        assert_eq!(result.status, Status::Off);
        assert_eq!(result.label, "Off");
    }

    #[test]
    fn test_tba_day_is_available_with_tba_label() {
        let mut record = ScheduleRecord::default();
        record.today.as_mut().unwrap().set_tba(true);
        let result = compute_status(at(10, 0), Some(&record), &EN);
        assert_eq!(result.status, Status::Available);
        assert_eq!(result.label, "To be announced");
    }

    #[test]
    fn test_within_working_hours() {
        let record = timed_schedule("09:00", "17:00");
        let result = compute_status(at(10, 0), Some(&record), &EN);
        assert_eq!(result.status, Status::Available);
        assert_eq!(result.label, "Working");

        // Window is [start, end): exactly at end the day is over
        assert_eq!(
            compute_status(at(17, 0), Some(&record), &EN).status,
            Status::Off
        );
        assert_eq!(
            compute_status(at(9, 0), Some(&record), &EN).status,
            Status::Available
        );
    }

    #[test]
    fn test_countdown_before_work_starts() {
        let record = timed_schedule("09:00", "17:00");
        let result = compute_status(at(8, 30), Some(&record), &EN);
        assert_eq!(result.status, Status::Off);
        assert!(result.label.contains("30min"), "label: {}", result.label);
        assert!(result.label.starts_with("Work starting in"));
    }

    #[test]
    fn test_after_hours_is_generic_off() {
        let record = timed_schedule("09:00", "17:00");
        let result = compute_status(at(18, 0), Some(&record), &EN);
        assert_eq!(result.status, Status::Off);
        assert_eq!(result.label, "Off");
    }

    #[test]
    fn test_unparseable_stored_times_degrade_to_available() {
        let record = timed_schedule("banana", "17:00");
        let result = compute_status(at(10, 0), Some(&record), &EN);
        assert_eq!(result.status, Status::Available);
    }

    #[test]
    fn test_greeting_thresholds_and_name() {
        assert_eq!(greeting(at(9, 0), &EN, None), "Good Morning");
        assert_eq!(greeting(at(12, 0), &EN, None), "Good Afternoon");
        assert_eq!(greeting(at(18, 0), &EN, None), "Good Evening");
        assert_eq!(greeting(at(9, 0), &EN, Some("Rui")), "Good Morning, Rui");
    }

    #[test]
    fn test_preview_rows() {
        let record = ScheduleRecord::default();
        let preview = schedule_preview(&record, Language::PtPt);

        let today = preview.today.unwrap();
        assert_eq!(today.day, "Hoje");
        assert_eq!(today.status, PreviewStatus::Available);
        assert_eq!(today.time_range.as_deref(), Some("09:00 - 17:00"));
        assert!(today.label.is_none());

        assert_eq!(preview.next_days.len(), 3);
        assert_eq!(preview.next_days[0].day, "Amanhã");
        // Thursday is off by default; upcoming days use the distinct label
        let thursday = &preview.next_days[2];
        assert_eq!(thursday.status, PreviewStatus::Off);
        assert_eq!(thursday.label.as_deref(), Some("De folga"));
        assert!(thursday.time_range.is_none());
    }

    #[test]
    fn test_preview_tba_row() {
        let mut record = ScheduleRecord::default();
        record.upcoming_days[1].tba = true;
        let preview = schedule_preview(&record, Language::En);
        let wednesday = &preview.next_days[1];
        assert_eq!(wednesday.status, PreviewStatus::Tba);
        assert_eq!(wednesday.label.as_deref(), Some("To be announced"));
    }
}
