use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid time of day '{0}', expected HH:MM")]
    InvalidTimeOfDay(String),

    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("unknown dementia level: {0}")]
    UnknownLevel(String),
}
