//! Per-kind occurrence generators.
//!
//! ## Summary
//! Every rule kind is modelled as a monotone sequence of landing dates that
//! can be addressed by index. A generator only has to answer two questions:
//! where does landing `n` fall, and which is the last landing on or before a
//! given day. The shared [`walk`] does the rest: it jumps straight to the
//! window instead of stepping from the seed, reconstructs how many
//! occurrences were already accepted before the window (so `count` is a
//! lifetime cap), then steps forward applying window, end date, exception and
//! count rules in that order.

mod custom;
mod daily;
mod monthly;
mod weekly;
mod yearly;

use chrono::NaiveDate;

use almanac_core::day::WeekStart;

use crate::rule::{Pattern, RecurrenceRule};
use crate::window::Window;

use custom::Custom;
use daily::Daily;
use monthly::Monthly;
use weekly::Weekly;
use yearly::Yearly;

/// An index-addressable, ascending sequence of landing dates.
pub(crate) trait Cadence {
    /// Landing date at `index`, or `None` once the sequence leaves the
    /// representable calendar.
    fn landing(&self, index: u64) -> Option<NaiveDate>;

    /// Largest index whose landing is on or before `day`; `0` when none is.
    fn index_floor(&self, day: NaiveDate) -> u64;

    fn is_landing(&self, day: NaiveDate) -> bool {
        self.landing(self.index_floor(day)) == Some(day)
    }
}

/// Generator selected by rule kind.
#[derive(Debug, Clone)]
pub(crate) enum Generator {
    Daily(Daily),
    Weekly(Weekly),
    Monthly(Monthly),
    Yearly(Yearly),
    Custom(Custom),
}

impl Generator {
    #[must_use]
    pub(crate) fn new(seed: NaiveDate, rule: &RecurrenceRule, week_start: WeekStart) -> Self {
        let interval = rule.interval;
        match &rule.pattern {
            Pattern::Daily => Self::Daily(Daily::new(seed, interval)),
            Pattern::Weekly { days } => {
                Self::Weekly(Weekly::new(seed, interval, days, week_start))
            }
            Pattern::Monthly { day_of_month } => {
                Self::Monthly(Monthly::new(seed, interval, *day_of_month))
            }
            Pattern::Yearly { month, day } => {
                Self::Yearly(Yearly::new(seed, interval, *month, *day))
            }
            Pattern::Custom { unit } => Self::Custom(Custom::new(seed, interval, *unit)),
        }
    }
}

impl Cadence for Generator {
    fn landing(&self, index: u64) -> Option<NaiveDate> {
        match self {
            Self::Daily(g) => g.landing(index),
            Self::Weekly(g) => g.landing(index),
            Self::Monthly(g) => g.landing(index),
            Self::Yearly(g) => g.landing(index),
            Self::Custom(g) => g.landing(index),
        }
    }

    fn index_floor(&self, day: NaiveDate) -> u64 {
        match self {
            Self::Daily(g) => g.index_floor(day),
            Self::Weekly(g) => g.index_floor(day),
            Self::Monthly(g) => g.index_floor(day),
            Self::Yearly(g) => g.index_floor(day),
            Self::Custom(g) => g.index_floor(day),
        }
    }
}

/// An accepted landing and its 0-based lifetime index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Accepted {
    pub date: NaiveDate,
    pub index: u64,
}

/// Result of walking a generator across one window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Walk {
    pub accepted: Vec<Accepted>,
    /// The iteration ceiling stopped the walk early.
    pub truncated: bool,
}

/// ## Summary
/// Walks `cadence` across `window` and returns the accepted landings.
///
/// Landings before `seed` are never accepted. Exceptions are skipped without
/// consuming a `count` slot.
///
/// `max_iterations` bounds the number of landings visited; when it stops the
/// walk the result is flagged as truncated.
pub(crate) fn walk<C: Cadence>(
    cadence: &C,
    seed: NaiveDate,
    rule: &RecurrenceRule,
    window: &Window,
    max_iterations: u32,
) -> Walk {
    let mut walk = Walk::default();

    if rule.end_date.is_some_and(|end| end < window.from() || end < seed) {
        return walk;
    }

    let Some(first) = first_index(cadence, seed) else {
        return walk;
    };

    // Fast-forward: last landing at or before the window start.
    let start = first.max(cadence.index_floor(window.from()));
    let Some(start_landing) = cadence.landing(start) else {
        return walk;
    };

    let excepted_before = rule
        .exceptions
        .range(seed..start_landing)
        .filter(|day| cadence.is_landing(**day))
        .map(|_| 1u64)
        .sum::<u64>();
    let mut accepted = (start - first).saturating_sub(excepted_before);
    let cap = rule.count.map(|c| u64::from(c.get()));

    if cap.is_some_and(|cap| accepted >= cap) {
        tracing::trace!(accepted, "Lifetime count exhausted before window");
        return walk;
    }

    let mut index = start;
    let mut iterations = 0u32;
    while let Some(day) = cadence.landing(index) {
        if day > window.to() || rule.end_date.is_some_and(|end| day > end) {
            break;
        }
        // Only flagged while an in-range landing is still pending.
        if iterations >= max_iterations {
            walk.truncated = true;
            break;
        }
        iterations += 1;

        if !rule.is_excepted(day) {
            // Landings between the fast-forward point and the window start
            // still use up lifetime slots.
            if day >= window.from() {
                walk.accepted.push(Accepted {
                    date: day,
                    index: accepted,
                });
            }
            accepted += 1;
            if cap.is_some_and(|cap| accepted >= cap) {
                break;
            }
        }

        let Some(next) = index.checked_add(1) else {
            break;
        };
        index = next;
    }

    tracing::trace!(
        start,
        iterations,
        accepted = walk.accepted.len(),
        "Walked recurrence window"
    );

    walk
}

/// Index of the first landing on or after `seed`.
fn first_index<C: Cadence>(cadence: &C, seed: NaiveDate) -> Option<u64> {
    let floor = cadence.index_floor(seed);
    match cadence.landing(floor) {
        Some(landing) if landing >= seed => Some(floor),
        Some(_) => floor
            .checked_add(1)
            .filter(|next| cadence.landing(*next).is_some()),
        None => None,
    }
}
