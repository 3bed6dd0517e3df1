use super::error_code::{self, DicecastErrorCode};

/// Errors raised while normalising a batch from the ingestion collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IngestError {
    #[error("malformed round at index {index}: {reason}")]
    MalformedRound { index: usize, reason: String },

    #[error("round feed unavailable: {reason}")]
    FeedUnavailable { reason: String },
}

impl DicecastErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            IngestError::MalformedRound { .. } => error_code::MALFORMED_ROUND,
            IngestError::FeedUnavailable { .. } => error_code::FEED_UNAVAILABLE,
        }
    }
}
