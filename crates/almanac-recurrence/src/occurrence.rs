//! Materialized occurrences of a recurring item.

use almanac_core::day::day_key;
use chrono::NaiveDate;
use serde::Serialize;

use crate::item::{Priority, SchedulableItem};

/// Separator between the seed id and the day key of a synthetic id.
pub const OCCURRENCE_ID_SEPARATOR: &str = "::";

/// ## Summary
/// One concrete occurrence of a recurring item. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// `<seed id>::<day key>`, stable across calls.
    pub id: String,
    pub parent_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    /// Always `false`; completion of generated occurrences is tracked elsewhere.
    pub completed: bool,
    /// 0-based position among all accepted occurrences since the seed.
    pub recurrence_index: u64,
}

/// Synthetic identifier of the occurrence of `seed_id` on `date`.
#[must_use]
pub fn occurrence_id(seed_id: &str, date: NaiveDate) -> String {
    format!("{seed_id}{OCCURRENCE_ID_SEPARATOR}{}", day_key(date))
}

impl Occurrence {
    #[must_use]
    pub fn materialize(seed: &SchedulableItem, date: NaiveDate, recurrence_index: u64) -> Self {
        Self {
            id: occurrence_id(&seed.id, date),
            parent_id: seed.id.clone(),
            title: seed.title.clone(),
            description: seed.description.clone(),
            priority: seed.priority,
            tags: seed.tags.clone(),
            date,
            completed: false,
            recurrence_index,
        }
    }
}
