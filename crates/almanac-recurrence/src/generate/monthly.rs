use std::num::NonZeroU32;

use almanac_core::day::{clipped_date, month_ordinal};
use chrono::NaiveDate;

use super::Cadence;

/// Lands on `day_of_month` of the seed's month and of every `step`-th month
/// after it, clipped to the last day of short months.
///
/// Landings are always derived from the seed month, so a clip in February
/// does not drag later months down to the 29th.
#[derive(Debug, Clone)]
pub(crate) struct Monthly {
    seed_month: i64,
    step: u64,
    day_of_month: u32,
}

impl Monthly {
    pub(crate) fn new(seed: NaiveDate, interval: NonZeroU32, day_of_month: u32) -> Self {
        Self::every(seed, u64::from(interval.get()), day_of_month)
    }

    pub(crate) fn every(seed: NaiveDate, step: u64, day_of_month: u32) -> Self {
        Self {
            seed_month: month_ordinal(seed),
            step: step.max(1),
            day_of_month,
        }
    }
}

impl Cadence for Monthly {
    fn landing(&self, index: u64) -> Option<NaiveDate> {
        let months = i64::try_from(index.checked_mul(self.step)?).ok()?;
        let ordinal = self.seed_month.checked_add(months)?;
        let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
        let month = u32::try_from(ordinal.rem_euclid(12)).ok()? + 1;
        clipped_date(year, month, self.day_of_month)
    }

    fn index_floor(&self, day: NaiveDate) -> u64 {
        let Ok(elapsed) = u64::try_from(month_ordinal(day) - self.seed_month) else {
            return 0;
        };
        let index = elapsed / self.step;
        // The clipped anchor in the day's own month may still lie ahead of it.
        if self.landing(index).is_some_and(|landing| landing > day) {
            index.saturating_sub(1)
        } else {
            index
        }
    }
}
