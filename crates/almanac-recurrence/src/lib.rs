//! Recurrence expansion for schedulable items.
//!
//! A recurring item stores a single seed due date plus a rule. This crate
//! normalizes the stored rule, walks the matching per-kind generator across a
//! day window and materializes one [`Occurrence`] per accepted landing date.
//! Nothing is persisted; every call is a pure function of its inputs.

pub mod error;
pub mod expand;
mod generate;
pub mod item;
pub mod occurrence;
pub mod rule;
pub mod window;

pub use error::{RecurrenceError, RecurrenceResult};
pub use expand::{ExpansionOptions, expand, expand_item, expand_normalized};
pub use item::{Priority, SchedulableItem};
pub use occurrence::{Occurrence, occurrence_id};
pub use rule::{Pattern, RawRecurrenceRule, RecurrenceRule, RuleKind, StepUnit, normalize};
pub use window::Window;
