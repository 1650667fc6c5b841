//! Start-time defaulting for the intake form.
//!
//! The start-time entry is pre-filled once, at construction, with the
//! current local time truncated to minute precision. An entry that already
//! holds a value is never overwritten.

use chrono::NaiveDateTime;

/// Minute-precision format used by the start-time entry (`2024-03-01T10:07`).
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format a moment at minute precision.
pub fn format_start_time(moment: NaiveDateTime) -> String {
    moment.format(START_TIME_FORMAT).to_string()
}

/// Default an existing entry value against `now`.
///
/// Returns `existing` unchanged when it is non-empty, otherwise `now`
/// truncated to minute precision.
pub fn defaulted(existing: &str, now: NaiveDateTime) -> String {
    if existing.is_empty() {
        format_start_time(now)
    } else {
        existing.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 7, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_value_is_defaulted_to_minute_precision() {
        assert_eq!(defaulted("", fixed_now()), "2024-03-01T10:07");
    }

    #[test]
    fn test_seconds_are_truncated() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 7, 59)
            .unwrap();
        assert_eq!(defaulted("", now), "2024-03-01T10:07");
    }

    #[test]
    fn test_prefilled_value_is_left_unchanged() {
        assert_eq!(defaulted("2023-12-24T09:00", fixed_now()), "2023-12-24T09:00");
        assert_eq!(defaulted("anything", fixed_now()), "anything");
    }
}
