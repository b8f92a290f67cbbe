//! Inclusive day windows.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{RecurrenceError, RecurrenceResult};

/// An inclusive `[from, to]` range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Window {
    from: NaiveDate,
    to: NaiveDate,
}

impl Window {
    /// ## Summary
    /// Creates a window spanning `from` through `to`, both inclusive.
    ///
    /// ## Errors
    /// Returns [`RecurrenceError::InvalidWindow`] if `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> RecurrenceResult<Self> {
        if from > to {
            return Err(RecurrenceError::InvalidWindow { from, to });
        }
        Ok(Self { from, to })
    }

    /// A window covering exactly one day.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }

    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }

    /// Every day of the window in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let to = self.to;
        self.from.iter_days().take_while(move |day| *day <= to)
    }
}
