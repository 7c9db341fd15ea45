//! Date and clock input parsing for logged entries

use crate::error::{Result, TrackerError};
use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone, Weekday};

/// Calendar date format used in entries and category files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date as typed on the command line, resolved against "today"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl DateReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day.trim())
                .map(DateReference::LastWeekday)
                .ok_or_else(|| TrackerError::InvalidDate(input.to_string()));
        }

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            other => {
                if let Some(weekday) = parse_weekday(other) {
                    return Ok(DateReference::Weekday(weekday));
                }
                NaiveDate::parse_from_str(other, DATE_FORMAT)
                    .map(DateReference::SpecificDate)
                    .map_err(|_| TrackerError::InvalidDate(input.to_string()))
            }
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            DateReference::LastWeekday(target) => {
                let back = match days_back(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateReference::SpecificDate(date) => *date,
        }
    }
}

fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday();
    ((current + 7 - target.num_days_from_monday()) % 7) as i64
}

fn parse_weekday(day: &str) -> Option<Weekday> {
    match day {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse an optional `--date` argument, defaulting to today
pub fn resolve_date(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match input {
        Some(text) => Ok(DateReference::parse(text)?.resolve(today)),
        None => Ok(today),
    }
}

/// Check that an entry date is a real `YYYY-MM-DD` calendar date
pub fn validate_date(date: &str) -> Result<NaiveDate> {
    if date.trim().is_empty() {
        return Err(TrackerError::InvalidEntry("date is required".to_string()));
    }
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
        TrackerError::InvalidEntry(format!("date '{}' is not in YYYY-MM-DD format", date))
    })
}

/// Parse a wall-clock time (`HH:MM` or `HH:MM:SS`)
pub fn parse_clock(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| TrackerError::InvalidTime(input.to_string()))
}

/// Combine a date and a local wall-clock time into an instant.
///
/// `now` is returned as-is for the `now` keyword so entries logged without an
/// explicit time keep sub-minute precision.
pub fn local_instant(
    date: NaiveDate,
    clock: &str,
    now: DateTime<FixedOffset>,
) -> Result<DateTime<FixedOffset>> {
    if clock.trim().eq_ignore_ascii_case("now") {
        return Ok(now);
    }
    let naive = date.and_time(parse_clock(clock)?);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|instant| instant.fixed_offset())
        .ok_or_else(|| TrackerError::InvalidTime(format!("{} does not exist locally", naive)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn friday() -> NaiveDate {
        // Friday, Jan 17, 2025
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    #[test]
    fn test_parse_simple_refs() {
        assert_eq!(DateReference::parse("today").unwrap(), DateReference::Today);
        assert_eq!(DateReference::parse("NOW").unwrap(), DateReference::Today);
        assert_eq!(
            DateReference::parse("yesterday").unwrap(),
            DateReference::Yesterday
        );
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            DateReference::parse("monday").unwrap(),
            DateReference::Weekday(Weekday::Mon)
        );
        assert_eq!(
            DateReference::parse("last fri").unwrap(),
            DateReference::LastWeekday(Weekday::Fri)
        );
    }

    #[test]
    fn test_parse_specific_date() {
        assert_eq!(
            DateReference::parse("2025-06-22").unwrap(),
            DateReference::SpecificDate(NaiveDate::from_ymd_opt(2025, 6, 22).unwrap())
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateReference::parse("tomorrow").is_err());
        assert!(DateReference::parse("2025-13-01").is_err());
        assert!(DateReference::parse("22-06-2025").is_err());
        assert!(DateReference::parse("last someday").is_err());
    }

    #[test]
    fn test_resolve_yesterday() {
        assert_eq!(
            DateReference::Yesterday.resolve(friday()),
            NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
        );
    }

    #[test]
    fn test_resolve_weekday_same_day_is_today() {
        assert_eq!(DateReference::Weekday(Weekday::Fri).resolve(friday()), friday());
    }

    #[test]
    fn test_resolve_weekday_past() {
        assert_eq!(
            DateReference::Weekday(Weekday::Mon).resolve(friday()),
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
        );
    }

    #[test]
    fn test_resolve_last_weekday_same_day_goes_back_a_week() {
        assert_eq!(
            DateReference::LastWeekday(Weekday::Fri).resolve(friday()),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
    }

    #[test]
    fn test_resolve_date_defaults_to_today() {
        assert_eq!(resolve_date(None, friday()).unwrap(), friday());
        assert_eq!(
            resolve_date(Some("yesterday"), friday()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 16).unwrap()
        );
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-06-22").is_ok());
        assert!(matches!(
            validate_date(""),
            Err(TrackerError::InvalidEntry(msg)) if msg.contains("required")
        ));
        assert!(matches!(
            validate_date("June 22"),
            Err(TrackerError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_parse_clock_formats() {
        assert_eq!(parse_clock("14:30").unwrap(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(
            parse_clock("07:05:09").unwrap(),
            NaiveTime::from_hms_opt(7, 5, 9).unwrap()
        );
        assert!(matches!(parse_clock("25:00"), Err(TrackerError::InvalidTime(_))));
        assert!(parse_clock("half past two").is_err());
    }

    #[test]
    fn test_local_instant_uses_date_and_clock() {
        let now = Local::now().fixed_offset();
        let date = NaiveDate::from_ymd_opt(2025, 6, 22).unwrap();
        let instant = local_instant(date, "14:30", now).unwrap();
        let local = instant.with_timezone(&Local);
        assert_eq!(local.date_naive(), date);
        assert_eq!(local.hour(), 14);
        assert_eq!(local.minute(), 30);
    }

    #[test]
    fn test_local_instant_now_keyword() {
        let now = Local::now().fixed_offset();
        let date = NaiveDate::from_ymd_opt(2025, 6, 22).unwrap();
        assert_eq!(local_instant(date, "now", now).unwrap(), now);
    }
}
