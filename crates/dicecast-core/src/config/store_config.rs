use serde::{Deserialize, Serialize};

use super::defaults;

/// Retention limits for the Sequence Store and Prediction Ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Rounds retained; the oldest are dropped first.
    pub max_history: usize,
    /// Ledger entries retained.
    pub max_predictions_history: usize,
    /// Length of the recent-sequence digest returned with each forecast.
    pub digest_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_history: defaults::DEFAULT_MAX_HISTORY,
            max_predictions_history: defaults::DEFAULT_MAX_PREDICTIONS_HISTORY,
            digest_len: defaults::DEFAULT_DIGEST_LEN,
        }
    }
}
