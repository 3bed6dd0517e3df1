use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, PredictorKind, RoundId};

/// A degraded-data condition that shaped a forecast.
///
/// These never surface as errors; they are carried alongside the answer
/// so the rationale cannot hide them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fallback {
    /// The store held no rounds; the category is a coin draw.
    EmptyStore,
    /// A predictor had fewer rounds than it needs and used its default.
    InsufficientHistory {
        predictor: PredictorKind,
        needed: usize,
        available: usize,
    },
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::EmptyStore => write!(f, "empty store"),
            Fallback::InsufficientHistory {
                predictor,
                needed,
                available,
            } => write!(
                f,
                "{predictor}: insufficient history ({available}/{needed})"
            ),
        }
    }
}

/// The answer of one prediction cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted category of the next round.
    pub category: Category,
    /// Confidence in `[0, 1]`, rounded to two decimals.
    pub confidence: f64,
    /// Diagnostic explanation; not consumed by any downstream logic.
    pub rationale: String,
    /// Most recent categories, oldest first.
    pub recent_digest: Vec<Category>,
    /// Latest stored round the forecast was made from.
    pub basis_round: Option<RoundId>,
    /// Degraded-data conditions met while forecasting.
    pub fallbacks: Vec<Fallback>,
    pub generated_at: DateTime<Utc>,
}

impl Forecast {
    /// The recent digest as a token string, e.g. `"BSSB"`.
    pub fn digest_string(&self) -> String {
        Category::render(&self.recent_digest)
    }

    /// Id of the round being forecast.
    pub fn target_round(&self) -> Option<RoundId> {
        self.basis_round.map(|id| id + 1)
    }

    pub fn is_degraded(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}
