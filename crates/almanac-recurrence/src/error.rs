use chrono::NaiveDate;
use thiserror::Error;

/// Recurrence expansion errors
#[derive(Error, Debug)]
pub enum RecurrenceError {
    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("Invalid window: {from} is after {to}")]
    InvalidWindow { from: NaiveDate, to: NaiveDate },
}

pub type RecurrenceResult<T> = std::result::Result<T, RecurrenceError>;
