//! Structured error codes for the serving boundary.

/// Every error enum provides a stable code string so the serving
/// collaborator can report failures without parsing messages.
pub trait DicecastErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_ROUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MALFORMED_ROUND: &str = "MALFORMED_ROUND";
pub const FEED_UNAVAILABLE: &str = "FEED_UNAVAILABLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INSUFFICIENT_HISTORY: &str = "INSUFFICIENT_HISTORY";
pub const EMPTY_STORE: &str = "EMPTY_STORE";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
