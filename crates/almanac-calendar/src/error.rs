use thiserror::Error;

/// Calendar aggregation errors
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Unknown calendar view: {0}")]
    UnknownView(String),

    #[error("Anchor date {0} has no representable calendar window")]
    OutOfRange(chrono::NaiveDate),

    #[error(transparent)]
    RecurrenceError(#[from] almanac_recurrence::RecurrenceError),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
