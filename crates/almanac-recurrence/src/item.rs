//! The stored item a recurrence is seeded from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rule::RawRecurrenceRule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    None,
    Low,
    Medium,
    High,
}

/// ## Summary
/// A task-like record as it comes out of storage.
///
/// Plain items carry a single due date. Recurring items use `due_date` as the
/// seed occurrence and attach a [`RawRecurrenceRule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulableItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<RawRecurrenceRule>,
}
