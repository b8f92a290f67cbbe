use std::collections::BTreeSet;
use std::num::NonZeroU32;
use std::ops::RangeInclusive;

use almanac_core::day::{parse_day, parse_weekday};
use chrono::{Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;

use super::{Pattern, RawRecurrenceRule, RecurrenceRule, RuleKind, StepUnit};
use crate::error::{RecurrenceError, RecurrenceResult};

/// ## Summary
/// Validates a stored rule and resolves its defaults against the seed day.
///
/// - a missing `interval` becomes 1
/// - weekly rules without `daysOfWeek` repeat on the seed's weekday
/// - monthly rules without `dayOfMonth` anchor on the seed's day of month
/// - yearly rules without `month`/`day` anchor on the seed's month and day
/// - `endDate` and `exceptions` are folded to calendar days in `tz`
/// - a `count` of zero means "no cap"
///
/// ## Errors
/// Returns [`RecurrenceError::InvalidRule`] for an unknown `type` or `unit`, a
/// `custom` rule without `unit`, an `interval` below 1, an anchor outside its
/// calendar range, an unknown weekday name, a negative `count` or a date that
/// cannot be parsed.
///
/// ## Side Effects
/// None - pure function.
pub fn normalize(
    raw: &RawRecurrenceRule,
    seed: NaiveDate,
    tz: &Tz,
) -> RecurrenceResult<RecurrenceRule> {
    let kind: RuleKind = raw.kind.parse()?;

    let pattern = match kind {
        RuleKind::Daily => Pattern::Daily,
        RuleKind::Weekly => Pattern::Weekly {
            days: weekdays(&raw.days_of_week, seed)?,
        },
        RuleKind::Monthly => Pattern::Monthly {
            day_of_month: anchor(raw.day_of_month, "dayOfMonth", 1..=31)?
                .unwrap_or_else(|| seed.day()),
        },
        RuleKind::Yearly => Pattern::Yearly {
            month: anchor(raw.month, "month", 1..=12)?.unwrap_or_else(|| seed.month()),
            day: anchor(raw.day, "day", 1..=31)?.unwrap_or_else(|| seed.day()),
        },
        RuleKind::Custom => {
            let unit: StepUnit = raw
                .unit
                .as_deref()
                .ok_or_else(|| RecurrenceError::InvalidRule("custom rule without unit".into()))?
                .parse()?;
            Pattern::Custom { unit }
        }
    };

    let end_date = raw
        .end_date
        .as_deref()
        .map(|value| day(value, "endDate", tz))
        .transpose()?;

    let exceptions = raw
        .exceptions
        .iter()
        .map(|value| day(value, "exceptions", tz))
        .collect::<RecurrenceResult<BTreeSet<_>>>()?;

    let rule = RecurrenceRule {
        pattern,
        interval: interval(raw.interval)?,
        end_date,
        count: count(raw.count)?,
        exceptions,
    };

    tracing::trace!(
        kind = %kind,
        interval = rule.interval.get(),
        end_date = ?rule.end_date,
        count = ?rule.count,
        exceptions = rule.exceptions.len(),
        "Normalized recurrence rule"
    );

    Ok(rule)
}

fn interval(value: Option<i64>) -> RecurrenceResult<NonZeroU32> {
    let Some(value) = value else {
        return Ok(NonZeroU32::MIN);
    };
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            RecurrenceError::InvalidRule(format!("interval must be at least 1, got {value}"))
        })
}

fn count(value: Option<i64>) -> RecurrenceResult<Option<NonZeroU32>> {
    match value {
        None | Some(0) => Ok(None),
        Some(value) => u32::try_from(value)
            .map(NonZeroU32::new)
            .map_err(|e| RecurrenceError::InvalidRule(format!("count {value}: {e}"))),
    }
}

fn anchor(
    value: Option<i64>,
    field: &'static str,
    range: RangeInclusive<u32>,
) -> RecurrenceResult<Option<u32>> {
    let Some(value) = value else {
        return Ok(None);
    };
    u32::try_from(value)
        .ok()
        .filter(|v| range.contains(v))
        .map(Some)
        .ok_or_else(|| {
            RecurrenceError::InvalidRule(format!(
                "{field} must be within {}..={}, got {value}",
                range.start(),
                range.end()
            ))
        })
}

fn weekdays(names: &[String], seed: NaiveDate) -> RecurrenceResult<Vec<Weekday>> {
    if names.is_empty() {
        return Ok(vec![seed.weekday()]);
    }

    let mut days = names
        .iter()
        .map(|name| {
            parse_weekday(name)
                .map_err(|e| RecurrenceError::InvalidRule(format!("daysOfWeek: {e}")))
        })
        .collect::<RecurrenceResult<Vec<_>>>()?;
    days.sort_by_key(Weekday::num_days_from_monday);
    days.dedup();
    Ok(days)
}

fn day(value: &str, field: &'static str, tz: &Tz) -> RecurrenceResult<NaiveDate> {
    parse_day(value, tz).map_err(|e| RecurrenceError::InvalidRule(format!("{field}: {e}")))
}
