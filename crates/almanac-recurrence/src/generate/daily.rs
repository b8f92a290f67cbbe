use std::num::NonZeroU32;

use chrono::{Days, NaiveDate};

use super::Cadence;

/// Lands on the seed and then every `step` days.
#[derive(Debug, Clone)]
pub(crate) struct Daily {
    seed: NaiveDate,
    step: u64,
}

impl Daily {
    pub(crate) fn new(seed: NaiveDate, interval: NonZeroU32) -> Self {
        Self::every(seed, u64::from(interval.get()))
    }

    /// Fixed stride of `step` days. A zero stride is treated as one day.
    pub(crate) fn every(seed: NaiveDate, step: u64) -> Self {
        Self {
            seed,
            step: step.max(1),
        }
    }
}

impl Cadence for Daily {
    fn landing(&self, index: u64) -> Option<NaiveDate> {
        self.seed
            .checked_add_days(Days::new(index.checked_mul(self.step)?))
    }

    fn index_floor(&self, day: NaiveDate) -> u64 {
        let elapsed = day.signed_duration_since(self.seed).num_days();
        u64::try_from(elapsed).map_or(0, |elapsed| elapsed / self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_landings_step_by_interval() {
        let daily = Daily::new(date(2024, 2, 27), NonZeroU32::new(2).unwrap());
        assert_eq!(daily.landing(0), Some(date(2024, 2, 27)));
        assert_eq!(daily.landing(1), Some(date(2024, 2, 29)));
        assert_eq!(daily.landing(2), Some(date(2024, 3, 2)));
    }

    #[test]
    fn test_index_floor() {
        let daily = Daily::new(date(2024, 6, 1), NonZeroU32::new(3).unwrap());
        assert_eq!(daily.index_floor(date(2024, 5, 1)), 0);
        assert_eq!(daily.index_floor(date(2024, 6, 1)), 0);
        assert_eq!(daily.index_floor(date(2024, 6, 3)), 0);
        assert_eq!(daily.index_floor(date(2024, 6, 4)), 1);
        assert_eq!(daily.index_floor(date(2024, 6, 30)), 9);
        assert!(daily.is_landing(date(2024, 6, 28)));
        assert!(!daily.is_landing(date(2024, 6, 29)));
    }

    #[test]
    fn test_landing_past_calendar_end() {
        let daily = Daily::every(NaiveDate::MAX, 1);
        assert_eq!(daily.landing(0), Some(NaiveDate::MAX));
        assert_eq!(daily.landing(1), None);
    }
}
