//! Calendar views and the windows they cover.

use std::str::FromStr;

use almanac_core::day::{WeekStart, clipped_date};
use almanac_recurrence::Window;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Day,
    Week,
    #[default]
    Month,
}

impl ViewKind {
    /// ## Summary
    /// Resolves the window a view anchored at `anchor` displays.
    ///
    /// - `day`: the anchor day alone
    /// - `week`: the week containing the anchor
    /// - `month`: whole weeks covering the anchor's month, so the grid starts on
    ///   a week start and ends on a week end
    ///
    /// ## Errors
    /// Returns [`CalendarError::OutOfRange`] if the month bounds cannot be built.
    pub fn window(self, anchor: NaiveDate, week_start: WeekStart) -> CalendarResult<Window> {
        let (from, to) = match self {
            Self::Day => (anchor, anchor),
            Self::Week => (
                week_start.start_of_week(anchor),
                week_start.end_of_week(anchor),
            ),
            Self::Month => {
                let first = anchor
                    .with_day(1)
                    .ok_or(CalendarError::OutOfRange(anchor))?;
                let last = clipped_date(anchor.year(), anchor.month(), 31)
                    .ok_or(CalendarError::OutOfRange(anchor))?;
                (
                    week_start.start_of_week(first),
                    week_start.end_of_week(last),
                )
            }
        };
        Ok(Window::new(from, to)?)
    }
}

impl FromStr for ViewKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(CalendarError::UnknownView(other.to_string())),
        }
    }
}
