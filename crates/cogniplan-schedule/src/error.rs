use cogniplan_core::models::weekday::Weekday;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("{day} is listed in the template but has no windows")]
    EmptyDay { day: Weekday },

    #[error("{day} window starting {start} has zero capacity")]
    ZeroCapacity { day: Weekday, start: String },

    #[error("{day} window {start}-{end} ends before it starts")]
    InvertedWindow {
        day: Weekday,
        start: String,
        end: String,
    },

    #[error("{day} window capacities add up to more than one day can hold")]
    CapacityOverflow { day: Weekday },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
