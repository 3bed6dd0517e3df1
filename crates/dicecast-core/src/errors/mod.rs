pub mod config_error;
pub mod error_code;
pub mod history_error;
pub mod ingest_error;

pub use config_error::ConfigError;
pub use error_code::DicecastErrorCode;
pub use history_error::HistoryError;
pub use ingest_error::IngestError;

/// Top-level error for the Dicecast workspace.
#[derive(Debug, thiserror::Error)]
pub enum DicecastError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DicecastErrorCode for DicecastError {
    fn error_code(&self) -> &'static str {
        match self {
            DicecastError::Ingest(e) => e.error_code(),
            DicecastError::Config(e) => e.error_code(),
            DicecastError::History(e) => e.error_code(),
            DicecastError::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type DicecastResult<T> = Result<T, DicecastError>;
