use std::num::NonZeroU32;

use almanac_core::day::clipped_date;
use chrono::{Datelike, NaiveDate};

use super::Cadence;

/// Lands on (`month`, `day`) of the seed's year and of every `step`-th year
/// after it. Feb 29 clips to Feb 28 outside leap years.
#[derive(Debug, Clone)]
pub(crate) struct Yearly {
    seed_year: i32,
    step: u64,
    month: u32,
    day: u32,
}

impl Yearly {
    pub(crate) fn new(seed: NaiveDate, interval: NonZeroU32, month: u32, day: u32) -> Self {
        Self::every(seed, u64::from(interval.get()), month, day)
    }

    pub(crate) fn every(seed: NaiveDate, step: u64, month: u32, day: u32) -> Self {
        Self {
            seed_year: seed.year(),
            step: step.max(1),
            month,
            day,
        }
    }
}

impl Cadence for Yearly {
    fn landing(&self, index: u64) -> Option<NaiveDate> {
        let years = i32::try_from(index.checked_mul(self.step)?).ok()?;
        clipped_date(self.seed_year.checked_add(years)?, self.month, self.day)
    }

    fn index_floor(&self, day: NaiveDate) -> u64 {
        let Ok(elapsed) = u64::try_from(i64::from(day.year()) - i64::from(self.seed_year)) else {
            return 0;
        };
        let index = elapsed / self.step;
        if self.landing(index).is_some_and(|landing| landing > day) {
            index.saturating_sub(1)
        } else {
            index
        }
    }
}
