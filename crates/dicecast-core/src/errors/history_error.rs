use super::error_code::{self, DicecastErrorCode};

/// Conditions where the store cannot support a computation.
///
/// Predictors translate these into a `Fallback` on their vote instead of
/// propagating them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("insufficient history: need {needed} rounds, have {available}")]
    InsufficientHistory { needed: usize, available: usize },

    #[error("sequence store is empty")]
    EmptyStore,
}

impl DicecastErrorCode for HistoryError {
    fn error_code(&self) -> &'static str {
        match self {
            HistoryError::InsufficientHistory { .. } => error_code::INSUFFICIENT_HISTORY,
            HistoryError::EmptyStore => error_code::EMPTY_STORE,
        }
    }
}
