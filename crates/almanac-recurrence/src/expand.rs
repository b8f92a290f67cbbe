//! Window expansion entry points.

use std::num::NonZeroU32;

use almanac_core::config::{DEFAULT_MAX_ITERATIONS, Settings};
use almanac_core::day::{WeekStart, day_of};
use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::error::RecurrenceResult;
use crate::generate::{Generator, walk};
use crate::item::SchedulableItem;
use crate::occurrence::Occurrence;
use crate::rule::{RawRecurrenceRule, RecurrenceRule, normalize};
use crate::window::Window;

/// Options for recurrence expansion.
#[derive(Debug, Clone)]
pub struct ExpansionOptions {
    /// Hard ceiling on landings visited per call.
    pub max_iterations: NonZeroU32,
    /// First day of the week weekly rules are aligned to.
    pub week_start: WeekStart,
    /// Zone used to fold the seed and date-like rule fields onto days.
    pub timezone: Tz,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            week_start: WeekStart::default(),
            timezone: Tz::UTC,
        }
    }
}

impl From<&Settings> for ExpansionOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            max_iterations: settings.recurrence.max_iterations,
            week_start: settings.recurrence.week_start,
            timezone: settings.calendar.timezone,
        }
    }
}

impl ExpansionOptions {
    #[must_use]
    pub const fn with_max_iterations(mut self, max: NonZeroU32) -> Self {
        self.max_iterations = max;
        self
    }

    #[must_use]
    pub const fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    #[must_use]
    pub const fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}

/// ## Summary
/// Expands a recurring item into its occurrences inside `window`.
///
/// Items that are not recurring, have no rule or have no seed due date yield
/// an empty sequence. Occurrences come back in ascending date order, and the
/// same arguments always produce the same sequence.
///
/// ## Errors
/// Returns [`crate::RecurrenceError::InvalidRule`] if `rule` fails
/// normalization. Callers aggregating many items should treat that item as
/// producing nothing and carry on.
///
/// ## Side Effects
/// None - pure function apart from tracing events.
pub fn expand(
    seed: &SchedulableItem,
    rule: Option<&RawRecurrenceRule>,
    window: &Window,
    options: &ExpansionOptions,
) -> RecurrenceResult<Vec<Occurrence>> {
    let (true, Some(rule), Some(due_date)) = (seed.is_recurring, rule, seed.due_date) else {
        tracing::trace!(item = %seed.id, "Item is not expandable");
        return Ok(Vec::new());
    };

    let seed_day = day_of(due_date, &options.timezone);
    let rule = normalize(rule, seed_day, &options.timezone)?;

    Ok(expand_normalized(seed, seed_day, &rule, window, options))
}

/// ## Summary
/// Expands `item` using the rule stored on the item itself.
///
/// ## Errors
/// See [`expand`].
pub fn expand_item(
    item: &SchedulableItem,
    window: &Window,
    options: &ExpansionOptions,
) -> RecurrenceResult<Vec<Occurrence>> {
    expand(item, item.recurrence_rule.as_ref(), window, options)
}

/// ## Summary
/// Runs the generator for an already normalized rule seeded at `seed_day`.
///
/// ## Side Effects
/// Emits a `warn` event when the iteration ceiling truncates the result.
#[must_use]
pub fn expand_normalized(
    seed: &SchedulableItem,
    seed_day: NaiveDate,
    rule: &RecurrenceRule,
    window: &Window,
    options: &ExpansionOptions,
) -> Vec<Occurrence> {
    let generator = Generator::new(seed_day, rule, options.week_start);
    let walk = walk(&generator, seed_day, rule, window, options.max_iterations.get());

    if walk.truncated {
        tracing::warn!(
            item = %seed.id,
            kind = %rule.pattern.kind(),
            max_iterations = options.max_iterations.get(),
            from = %window.from(),
            to = %window.to(),
            "Recurrence expansion hit the iteration ceiling, returning partial result"
        );
    }

    let occurrences: Vec<_> = walk
        .accepted
        .into_iter()
        .map(|accepted| Occurrence::materialize(seed, accepted.date, accepted.index))
        .collect();

    tracing::debug!(
        item = %seed.id,
        kind = %rule.pattern.kind(),
        occurrences = occurrences.len(),
        "Expanded recurring item"
    );

    occurrences
}
