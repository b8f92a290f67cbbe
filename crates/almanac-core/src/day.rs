//! Calendar-day helpers.
//!
//! ## Summary
//! Everything downstream works at day granularity. A day key is the canonical
//! `YYYY-MM-DD` rendering of a [`NaiveDate`]; instants are folded to a day in a
//! caller-supplied time zone before any comparison happens.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// `strftime` format of a day key.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Renders the canonical day key for `date`.
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Returns the calendar day `instant` falls on in `tz`.
#[must_use]
pub fn day_of(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// ## Summary
/// Parses a date-like string into a calendar day.
///
/// Accepts a plain `YYYY-MM-DD` date, an RFC 3339 timestamp (folded to its day
/// in `tz`), or a floating `YYYY-MM-DDTHH:MM:SS` timestamp (its date part is
/// taken as-is).
///
/// ## Errors
/// Returns [`CoreError::InvalidDate`] if the input matches none of the forms.
pub fn parse_day(input: &str, tz: &Tz) -> CoreResult<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, DAY_KEY_FORMAT) {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(day_of(instant.with_timezone(&Utc), tz));
    }
    if let Ok(floating) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(floating.date());
    }

    Err(CoreError::InvalidDate(input.to_string()))
}

/// ## Summary
/// Parses an English weekday name (`"monday"`, `"Tue"`, ...), ignoring case.
///
/// ## Errors
/// Returns [`CoreError::UnknownWeekday`] for anything else.
pub fn parse_weekday(name: &str) -> CoreResult<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "sunday" | "sun" => Ok(Weekday::Sun),
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        _ => Err(CoreError::UnknownWeekday(name.to_string())),
    }
}

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Position of `weekday` within a week that starts on `self` (0..=6).
    #[must_use]
    pub fn offset_of(self, weekday: Weekday) -> u32 {
        match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        }
    }

    /// First day of the week containing `date`.
    #[must_use]
    pub fn start_of_week(self, date: NaiveDate) -> NaiveDate {
        date.week(self.weekday()).first_day()
    }

    /// Last day of the week containing `date`.
    #[must_use]
    pub fn end_of_week(self, date: NaiveDate) -> NaiveDate {
        date.week(self.weekday()).last_day()
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sunday => f.write_str("sunday"),
            Self::Monday => f.write_str("monday"),
        }
    }
}

/// Number of days in `month` (1-12) of `year`.
///
/// Returns `None` for a month outside 1-12 or a year outside chrono's range.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// ## Summary
/// Builds `year-month-day`, clipping `day` to the last day of the month.
///
/// `(2023, 2, 29)` yields 2023-02-28 and `(2024, 4, 31)` yields 2024-04-30.
#[must_use]
pub fn clipped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let last = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.clamp(1, last))
}

/// Months elapsed since year 0 for the month containing `date`.
#[must_use]
pub fn month_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_key() {
        assert_eq!(day_key(date(2024, 6, 5)), "2024-06-05");
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_day("2024-06-05", &Tz::UTC).unwrap(), date(2024, 6, 5));
    }

    #[test]
    fn test_parse_rfc3339_folds_to_zone() {
        let parsed = parse_day("2024-06-05T02:00:00Z", &chrono_tz::America::New_York).unwrap();
        assert_eq!(parsed, date(2024, 6, 4));

        let parsed = parse_day("2024-06-05T02:00:00Z", &Tz::UTC).unwrap();
        assert_eq!(parsed, date(2024, 6, 5));
    }

    #[test]
    fn test_parse_floating_timestamp() {
        assert_eq!(
            parse_day("2024-06-05T23:30:00.000", &Tz::UTC).unwrap(),
            date(2024, 6, 5)
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_day("next tuesday", &Tz::UTC),
            Err(CoreError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("Monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("sat").unwrap(), Weekday::Sat);
        assert!(parse_weekday("funday").is_err());
    }

    #[test]
    fn test_week_bounds() {
        // 2024-06-05 is a Wednesday
        let wed = date(2024, 6, 5);
        assert_eq!(WeekStart::Sunday.start_of_week(wed), date(2024, 6, 2));
        assert_eq!(WeekStart::Sunday.end_of_week(wed), date(2024, 6, 8));
        assert_eq!(WeekStart::Monday.start_of_week(wed), date(2024, 6, 3));
        assert_eq!(WeekStart::Monday.end_of_week(wed), date(2024, 6, 9));
    }

    #[test]
    fn test_offsets() {
        assert_eq!(WeekStart::Sunday.offset_of(Weekday::Sun), 0);
        assert_eq!(WeekStart::Sunday.offset_of(Weekday::Sat), 6);
        assert_eq!(WeekStart::Monday.offset_of(Weekday::Sun), 6);
        assert_eq!(WeekStart::Monday.offset_of(Weekday::Mon), 0);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn test_clipped_date() {
        assert_eq!(clipped_date(2023, 2, 29), Some(date(2023, 2, 28)));
        assert_eq!(clipped_date(2024, 2, 29), Some(date(2024, 2, 29)));
        assert_eq!(clipped_date(2024, 4, 31), Some(date(2024, 4, 30)));
    }

    #[test]
    fn test_month_ordinal() {
        assert_eq!(
            month_ordinal(date(2024, 3, 1)) - month_ordinal(date(2023, 11, 30)),
            4
        );
    }
}
