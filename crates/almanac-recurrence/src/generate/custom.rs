use std::num::NonZeroU32;

use chrono::{Datelike, NaiveDate};

use super::{Cadence, Daily, Monthly, Yearly};
use crate::rule::StepUnit;

/// ## Summary
/// One landing per `interval` x `unit` step from the seed, no fan-out.
///
/// Day and week units are fixed-length strides. Month and year units keep the
/// seed's day (and month) as anchor and clip it per step, exactly like the
/// dedicated monthly and yearly generators.
#[derive(Debug, Clone)]
pub(crate) enum Custom {
    Stride(Daily),
    Months(Monthly),
    Years(Yearly),
}

impl Custom {
    pub(crate) fn new(seed: NaiveDate, interval: NonZeroU32, unit: StepUnit) -> Self {
        let interval = u64::from(interval.get());
        match unit {
            StepUnit::Day => Self::Stride(Daily::every(seed, interval)),
            StepUnit::Week => Self::Stride(Daily::every(seed, interval.saturating_mul(7))),
            StepUnit::Month => Self::Months(Monthly::every(seed, interval, seed.day())),
            StepUnit::Year => Self::Years(Yearly::every(seed, interval, seed.month(), seed.day())),
        }
    }
}

impl Cadence for Custom {
    fn landing(&self, index: u64) -> Option<NaiveDate> {
        match self {
            Self::Stride(g) => g.landing(index),
            Self::Months(g) => g.landing(index),
            Self::Years(g) => g.landing(index),
        }
    }

    fn index_floor(&self, day: NaiveDate) -> u64 {
        match self {
            Self::Stride(g) => g.index_floor(day),
            Self::Months(g) => g.index_floor(day),
            Self::Years(g) => g.index_floor(day),
        }
    }
}
