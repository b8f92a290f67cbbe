//! Shared building blocks for the almanac crates: settings, the core error
//! type and calendar-day helpers.

pub mod config;
pub mod day;
pub mod error;
