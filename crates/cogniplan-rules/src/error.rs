use thiserror::Error;

/// Rejected patient input. Raised before the scheduler is consulted.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Missing critical data: cdrScore or mmseScore")]
    MissingScores,

    #[error("invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },
}
