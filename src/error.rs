use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Rejected setup input. The session never starts.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Recovered locally as retry feedback; no counters change.
    #[error("not a number: {0:?}")]
    NonNumericAnswer(String),

    #[error("cannot select a problem from an empty bank")]
    EmptyBankSelection,
}
