use thiserror::Error;

/// Errors raised while reading calendar values
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
