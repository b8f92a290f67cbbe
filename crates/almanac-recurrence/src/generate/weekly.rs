use std::num::NonZeroU32;

use almanac_core::day::WeekStart;
use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::Cadence;

/// ## Summary
/// Fans out to every selected weekday of each active week.
///
/// Active weeks are the week containing the seed and every `interval`-th week
/// after it. Landing `n` is slot `n % days` of active week `n / days`, so the
/// sequence is ascending as long as slots are sorted by their offset in the
/// week.
#[derive(Debug, Clone)]
pub(crate) struct Weekly {
    week_zero: NaiveDate,
    stride: u64,
    /// Day offsets from the week start, ascending, never empty.
    offsets: Vec<u64>,
}

impl Weekly {
    pub(crate) fn new(
        seed: NaiveDate,
        interval: NonZeroU32,
        days: &[Weekday],
        week_start: WeekStart,
    ) -> Self {
        let mut offsets: Vec<u64> = days
            .iter()
            .map(|day| u64::from(week_start.offset_of(*day)))
            .collect();
        offsets.sort_unstable();
        offsets.dedup();
        if offsets.is_empty() {
            offsets.push(u64::from(week_start.offset_of(seed.weekday())));
        }

        Self {
            week_zero: week_start.start_of_week(seed),
            stride: 7 * u64::from(interval.get()),
            offsets,
        }
    }

    fn slots(&self) -> u64 {
        u64::try_from(self.offsets.len()).unwrap_or(u64::MAX)
    }
}

impl Cadence for Weekly {
    fn landing(&self, index: u64) -> Option<NaiveDate> {
        let slots = self.slots();
        let week = index.checked_div(slots)?;
        let slot = usize::try_from(index % slots).ok()?;
        let offset = week
            .checked_mul(self.stride)?
            .checked_add(*self.offsets.get(slot)?)?;
        self.week_zero.checked_add_days(Days::new(offset))
    }

    fn index_floor(&self, day: NaiveDate) -> u64 {
        let Ok(elapsed) = u64::try_from(day.signed_duration_since(self.week_zero).num_days())
        else {
            return 0;
        };
        let week = elapsed / self.stride;
        let into_week = elapsed % self.stride;
        let passed = self
            .offsets
            .iter()
            .take_while(|offset| **offset <= into_week)
            .map(|_| 1u64)
            .sum::<u64>();

        let before_week = week.saturating_mul(self.slots());
        if passed == 0 {
            before_week.saturating_sub(1)
        } else {
            before_week.saturating_add(passed - 1)
        }
    }
}
