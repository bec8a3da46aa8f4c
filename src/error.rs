use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("invalid day: {0}")]
    InvalidDay(String),

    #[error("invalid window: start={start}, end={end}")]
    InvalidWindow { start: i64, end: i64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
