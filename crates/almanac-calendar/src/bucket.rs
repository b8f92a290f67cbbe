//! Groups plain items and recurring occurrences by calendar day.

use std::collections::BTreeMap;

use almanac_core::config::Settings;
use almanac_core::day::day_of;
use almanac_recurrence::{
    ExpansionOptions, Occurrence, Priority, SchedulableItem, Window, expand_item,
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct BucketOptions {
    pub expansion: ExpansionOptions,
    /// Drop completed items before grouping.
    pub hide_completed: bool,
}

impl From<&Settings> for BucketOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            expansion: ExpansionOptions::from(settings),
            hide_completed: settings.calendar.hide_completed,
        }
    }
}

impl BucketOptions {
    #[must_use]
    pub const fn with_hide_completed(mut self, hide_completed: bool) -> Self {
        self.hide_completed = hide_completed;
        self
    }
}

/// A single line on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub completed: bool,
    /// Day the entry falls on: the due day of a plain item, the occurrence
    /// day of a generated one.
    pub date: NaiveDate,
    /// Seed id for generated entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_index: Option<u64>,
}

impl CalendarEntry {
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        self.parent_id.is_some()
    }

    fn plain(item: &SchedulableItem, date: NaiveDate) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            priority: item.priority,
            tags: item.tags.clone(),
            completed: item.completed,
            date,
            parent_id: None,
            recurrence_index: None,
        }
    }
}

impl From<Occurrence> for CalendarEntry {
    fn from(occurrence: Occurrence) -> Self {
        Self {
            id: occurrence.id,
            title: occurrence.title,
            description: occurrence.description,
            priority: occurrence.priority,
            tags: occurrence.tags,
            completed: occurrence.completed,
            date: occurrence.date,
            parent_id: Some(occurrence.parent_id),
            recurrence_index: Some(occurrence.recurrence_index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub entries: Vec<CalendarEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Day-indexed view over a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub range: CalendarRange,
    pub days: Vec<CalendarDay>,
}

impl CalendarView {
    /// Entries on `date`, empty when the day is outside the range.
    #[must_use]
    pub fn entries_on(&self, date: NaiveDate) -> &[CalendarEntry] {
        self.days
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.entries.as_slice())
            .unwrap_or_default()
    }
}

/// ## Summary
/// Builds the day-indexed view of `items` over `window`.
///
/// Non-recurring items land on the day of their due date. Recurring items are
/// expanded and contribute one entry per occurrence. Every day of the window
/// is present, in order, including days without entries. Within a day plain
/// entries come first, then generated ones, each in input order.
///
/// ## Side Effects
/// Recurring items whose rule cannot be normalized are logged at `warn` and
/// skipped.
#[must_use]
pub fn bucket_by_day(
    items: &[SchedulableItem],
    window: &Window,
    options: &BucketOptions,
) -> CalendarView {
    let mut buckets: BTreeMap<NaiveDate, Vec<CalendarEntry>> = BTreeMap::new();
    let keep = |entry: &CalendarEntry| !(options.hide_completed && entry.completed);

    for item in items.iter().filter(|item| !item.is_recurring) {
        let Some(due_date) = item.due_date else {
            continue;
        };
        let date = day_of(due_date, &options.expansion.timezone);
        let entry = CalendarEntry::plain(item, date);
        if window.contains(date) && keep(&entry) {
            buckets.entry(date).or_default().push(entry);
        }
    }

    for item in items.iter().filter(|item| item.is_recurring) {
        let occurrences = match expand_item(item, window, &options.expansion) {
            Ok(occurrences) => occurrences,
            Err(e) => {
                tracing::warn!(
                    item = %item.id,
                    error = %e,
                    "Skipping item with invalid recurrence rule"
                );
                continue;
            }
        };
        for occurrence in occurrences {
            let entry = CalendarEntry::from(occurrence);
            if keep(&entry) {
                buckets.entry(entry.date).or_default().push(entry);
            }
        }
    }

    let days: Vec<CalendarDay> = window
        .days()
        .map(|date| CalendarDay {
            date,
            entries: buckets.remove(&date).unwrap_or_default(),
        })
        .collect();

    tracing::debug!(
        from = %window.from(),
        to = %window.to(),
        items = items.len(),
        entries = days.iter().map(|day| day.entries.len()).sum::<usize>(),
        "Bucketed calendar window"
    );

    CalendarView {
        range: CalendarRange {
            start: window.from(),
            end: window.to(),
        },
        days,
    }
}
