//! Recurrence rules, raw and normalized.
//!
//! [`RawRecurrenceRule`] mirrors the stored document and accepts anything the
//! storage layer can hold. [`normalize`] turns it into a [`RecurrenceRule`]
//! whose [`Pattern`] carries fully resolved anchors, so generators never look
//! back at the seed for defaults.

mod normalize;

use std::collections::BTreeSet;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::RecurrenceError;

pub use normalize::normalize;

/// Recurrence rule as stored alongside an item, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecurrenceRule {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<String>,
    #[serde(default)]
    pub day_of_month: Option<i64>,
    #[serde(default)]
    pub month: Option<i64>,
    #[serde(default)]
    pub day: Option<i64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

impl RuleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for RuleKind {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "custom" => Ok(Self::Custom),
            other => Err(RecurrenceError::InvalidRule(format!(
                "unknown recurrence type `{other}`"
            ))),
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step unit of a `custom` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepUnit {
    Day,
    Week,
    Month,
    Year,
}

impl FromStr for StepUnit {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(RecurrenceError::InvalidRule(format!(
                "unknown custom unit `{other}`"
            ))),
        }
    }
}

/// Cadence shape of a normalized rule, one variant per rule kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Daily,
    /// Never empty; deduplicated.
    Weekly { days: Vec<Weekday> },
    /// `day_of_month` is 1..=31 and gets clipped per month.
    Monthly { day_of_month: u32 },
    /// `month` is 1..=12, `day` is 1..=31 and gets clipped per year.
    Yearly { month: u32, day: u32 },
    Custom { unit: StepUnit },
}

impl Pattern {
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Daily => RuleKind::Daily,
            Self::Weekly { .. } => RuleKind::Weekly,
            Self::Monthly { .. } => RuleKind::Monthly,
            Self::Yearly { .. } => RuleKind::Yearly,
            Self::Custom { .. } => RuleKind::Custom,
        }
    }
}

/// A validated rule with every anchor resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub pattern: Pattern,
    pub interval: NonZeroU32,
    /// Inclusive last day an occurrence may land on.
    pub end_date: Option<NaiveDate>,
    /// Lifetime cap on accepted occurrences.
    pub count: Option<NonZeroU32>,
    /// Days that never produce an occurrence.
    pub exceptions: BTreeSet<NaiveDate>,
}

impl RecurrenceRule {
    /// A rule with the given pattern, interval 1 and no boundaries.
    #[must_use]
    pub const fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            interval: NonZeroU32::MIN,
            end_date: None,
            count: None,
            exceptions: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn with_interval(mut self, interval: NonZeroU32) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub const fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub const fn with_count(mut self, count: NonZeroU32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn with_exception(mut self, day: NaiveDate) -> Self {
        self.exceptions.insert(day);
        self
    }

    #[must_use]
    pub fn is_excepted(&self, day: NaiveDate) -> bool {
        self.exceptions.contains(&day)
    }
}
